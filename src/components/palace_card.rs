//! Card component for memory palace list items on the dashboard.

use leptos::prelude::*;

use crate::net::types::MemoryPalace;

/// A palace summary card linking into the palace viewer.
#[component]
pub fn PalaceCard(palace: MemoryPalace) -> impl IntoView {
    let href = format!("/palace/{}", palace.id);
    let description = if palace.description.is_empty() {
        "No description provided".to_owned()
    } else {
        palace.description.clone()
    };
    let caption = match &palace.created_at {
        Some(created) => format!("{} rooms \u{2022} Created {created}", palace.rooms_count),
        None => format!("{} rooms", palace.rooms_count),
    };

    view! {
        <div class="palace-card">
            <h3 class="palace-card__title">{palace.title.clone()}</h3>
            <p class="palace-card__description">{description}</p>
            <p class="palace-card__caption">{caption}</p>
            <a class="btn btn--primary" href=href>"Enter Palace"</a>
        </div>
    }
}

//! Landing page

use leptos::*;

use super::MoreInfo;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <MoreInfo/>
    }
}

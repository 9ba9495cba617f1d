use crate::qa::QaPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! { <QaPage /> }
}

//! Static about page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About NeighbourCare"</h1>
            <p>"We are dedicated to connecting neighbors with trusted local professionals."</p>
            <p>"Our mission is to build a stronger, more reliable community where help is just a click away."</p>
            <p>"Founded in 2024, we have helped thousands of households find the right person for the job."</p>
        </div>
    }
}

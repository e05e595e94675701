//! Home Page

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <h1>"The Bookshop"</h1>
                <p class="tagline">"Three good books about making things"</p>
            </header>

            <section class="items">
                <div class="item">
                    <h3>"The Art of Doing Science and Engineering"</h3>
                    <p class="price">"$23.00"</p>
                    <a href="/checkout?item=1" class="btn btn-primary">"Buy"</a>
                </div>
                <div class="item">
                    <h3>"The Making of Prince of Persia: Journals 1985-1993"</h3>
                    <p class="price">"$25.00"</p>
                    <a href="/checkout?item=2" class="btn btn-primary">"Buy"</a>
                </div>
                <div class="item">
                    <h3>"Working in Public: The Making and Maintenance of Open Source"</h3>
                    <p class="price">"$28.00"</p>
                    <a href="/checkout?item=3" class="btn btn-primary">"Buy"</a>
                </div>
            </section>
        </div>
    }
}

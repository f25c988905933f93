mod contact;
mod header;
mod homepage;
mod showcase;

use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::assets;
use header::Header;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta
                    name="description"
                    content="George Benedict - Full Stack Developer building responsive, scalable web solutions."
                />
                <link rel="icon" type="image/svg+xml" href=assets::FAVICON />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("George Benedict - {title}") />
        <Router>
            <Header />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

fn copyright_year() -> i32 {
    match DateTime::parse_from_rfc3339(env!("BUILD_TIME")) {
        Ok(dt) => dt.year(),
        Err(_) => Utc::now().year(),
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-6 border-t border-muted/30 text-center text-sm text-muted">
            <p>
                {format!("© {} Nnamdi George Benedict. All Rights Reserved.", copyright_year())}
            </p>
        </footer>
    }
}

use leptos::prelude::*;

use crate::assets;

const NAV_LINKS: [(&str, &str); 6] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#services", "Services"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="sticky top-0 z-40 bg-background/90 backdrop-blur shadow">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <a href="#" class="flex items-center gap-3 text-xl font-bold">
                    <img
                        src=assets::AVATAR
                        alt="George"
                        width="40"
                        height="40"
                        class="rounded-full"
                    />
                    <span>"George"<span class="text-cyan">"."</span></span>
                </a>
                <button
                    class="md:hidden text-2xl"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <ul class=move || {
                    if menu_open.get() {
                        "nav-links active flex flex-col absolute top-full inset-x-0 p-4 gap-4 bg-background md:static md:flex-row md:p-0"
                    } else {
                        "nav-links hidden md:flex md:flex-row gap-6"
                    }
                }>
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class="hover:text-cyan transition-colors duration-200"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </header>
    }
}

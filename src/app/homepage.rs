use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::ContactSection;
use super::showcase::{Projects, Services, Skills};
use crate::assets;

struct Social {
    href: &'static str,
    icon: &'static str,
    label: &'static str,
}

const SOCIALS: [Social; 4] = [
    Social {
        href: "https://github.com/georbene/",
        icon: "devicon-github-plain",
        label: "GitHub Profile",
    },
    Social {
        href: "https://www.linkedin.com/in/george-benedict-71647a367/",
        icon: "devicon-linkedin-plain",
        label: "LinkedIn Profile",
    },
    Social {
        href: "#",
        icon: "devicon-twitter-original",
        label: "Twitter Profile",
    },
    Social {
        href: "#",
        icon: "extra-instagram",
        label: "Instagram Profile",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Full Stack Developer" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Services />
        <ContactSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="min-h-[80vh] flex items-center">
            <div class="max-w-6xl mx-auto px-4 section-content">
                <h2 class="text-3xl lg:text-5xl font-bold leading-tight mb-6">
                    "I'm George Benedict, " <br />
                    "a dedicated Full Stack Developer turning your web vision."
                </h2>
                <p class="text-lg text-muted mb-8">
                    "Specializing in crafting high-quality, responsive web solutions tailored to your needs."
                </p>
                <a
                    href="#contact"
                    class="inline-block bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                >
                    "Hire Me"
                </a>
                <div class="flex gap-4 mt-8 text-2xl">
                    {SOCIALS
                        .iter()
                        .map(|s| {
                            view! {
                                <a
                                    href=s.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="hover:text-cyan"
                                    aria-label=s.label
                                >
                                    <i class=s.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-16">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-2xl font-bold text-center mb-12 section-title">"About Me"</h2>
                <div class="flex flex-col lg:flex-row items-center gap-8 lg:gap-12">
                    <div class="flex-shrink-0">
                        <img
                            src=assets::AVATAR
                            alt="George"
                            width="200"
                            height="200"
                            class="rounded-full"
                        />
                    </div>
                    <div class="max-w-3xl">
                        <h3 class="text-xl font-bold mb-4">"I'm Nnamdi George Benedict"</h3>
                        <p class="text-base mb-4 leading-relaxed">
                            "Experienced Full Stack Developer with expertise in both frontend and backend technologies. I create comprehensive web solutions that are performant, scalable, and user-friendly."
                        </p>
                        <p class="text-base mb-4 leading-relaxed">
                            "My journey has taken me through diverse projects, from e-commerce platforms to productivity tools, where I've honed skills in React, Node.js and MongoDB. What drives me is the opportunity to turn ideas into reality, blending creativity with technical precision."
                        </p>
                        <p class="text-base mb-4 leading-relaxed">
                            "Whether it's optimizing performance, enhancing user experiences, or providing ongoing support, I'm committed to delivering excellence. Based in Lagos, Nigeria, I thrive on collaboration and am excited to bring your vision to life."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

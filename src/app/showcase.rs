use leptos::prelude::*;

struct SkillCategory {
    title: &'static str,
    skills: &'static [&'static str],
}

static SKILLS: [SkillCategory; 4] = [
    SkillCategory {
        title: "Frontend Technologies",
        skills: &[
            "HTML",
            "CSS",
            "JavaScript",
            "React",
            "Angular",
            "Vue.js",
            "Next.js",
        ],
    },
    SkillCategory {
        title: "Backend Technologies",
        skills: &["Node.js + Express", "PHP", "Laravel"],
    },
    SkillCategory {
        title: "Database Technologies",
        skills: &["MongoDB", "MySQL", "Oracle"],
    },
    SkillCategory {
        title: "Other Skills",
        skills: &["GraphQL", "Git", "Hosting & Deployment", "Data Structures"],
    },
];

struct Project {
    title: &'static str,
    image: &'static str,
    description: &'static [&'static str],
    in_progress: bool,
    demo: &'static str,
    source: &'static str,
}

static PROJECTS: [Project; 5] = [
    Project {
        title: "E-Commerce Platform",
        image: "https://plus.unsplash.com/premium_photo-1684785617522-e2be3c1f3b22?w=500&auto=format&fit=crop&q=60",
        description: &["This is my first e-commerce solution built with HTML, CSS and JavaScript"],
        in_progress: true,
        demo: "https://ecommerce-level2.vercel.app/",
        source: "https://github.com/Georbene/EcommerceLevel2",
    },
    Project {
        title: "Weather App",
        image: "https://images.unsplash.com/photo-1514632595-4944383f2737?q=80&w=387&auto=format&fit=crop",
        description: &["A simple tool developed with HTML, CSS and JavaScript to check the weather, using the OpenWeatherMap API"],
        in_progress: false,
        demo: "https://weather-app-three-fawn.vercel.app/",
        source: "https://github.com/Georbene/weatherApp",
    },
    Project {
        title: "Olympics Form Reg",
        image: "https://images.unsplash.com/photo-1591618021247-0dd196431726?q=80&w=774&auto=format&fit=crop",
        description: &["A simple sport registration system"],
        in_progress: false,
        demo: "https://olympicform.vercel.app/",
        source: "https://github.com/Georbene/olympicform",
    },
    Project {
        title: "Simple Online Banking",
        image: "https://images.unsplash.com/photo-1681825984459-47ee999da245?q=80&w=1032&auto=format&fit=crop",
        description: &[
            "A simple full stack online banking web app built with React, Bootstrap, Node.js + Express and MongoDB",
            "User authentication with JWT tokens, money transfers, a unique online credit card for each user, and transaction history",
        ],
        in_progress: false,
        demo: "https://bank-frontend-eta.vercel.app/",
        source: "https://github.com/Georbene/bankFrontend",
    },
    Project {
        title: "Ludo Game Design",
        image: "https://plus.unsplash.com/premium_photo-1718879381673-32a65784d27c?q=80&w=1032&auto=format&fit=crop",
        description: &["A simple Ludo design with HTML and CSS"],
        in_progress: false,
        demo: "https://ludo-game-ruddy.vercel.app/",
        source: "https://github.com/Georbene/ludo_game/",
    },
];

const SERVICES: [(&str, &str, &str); 3] = [
    (
        "extra-laptop-code",
        "Web Development",
        "Building responsive and scalable web applications using modern frameworks and technologies.",
    ),
    (
        "extra-rocket",
        "Web Optimization",
        "Enhancing website performance, SEO, and user experience for maximum impact.",
    ),
    (
        "extra-tools",
        "Web Maintenance",
        "Providing ongoing support, updates, and security for web projects.",
    ),
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-16">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-2xl font-bold text-center mb-12 section-title">"My Skills"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {SKILLS
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="bg-brightBlack/30 p-6 rounded-lg">
                                    <h4 class="font-bold mb-4">{category.title}</h4>
                                    {category
                                        .skills
                                        .iter()
                                        .enumerate()
                                        .map(|(i, skill)| {
                                            // bars fill one after another
                                            let delay = format!(
                                                "width: 100%; transition-delay: {:.1}s",
                                                (i + 1) as f32 * 0.1,
                                            );
                                            view! {
                                                <div class="mb-3">
                                                    <div class="text-sm mb-1">{*skill}</div>
                                                    <div class="h-2 rounded bg-muted/30">
                                                        <div
                                                            class="h-2 rounded bg-cyan transition-all duration-700"
                                                            style=delay
                                                        ></div>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-16">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-2xl font-bold text-center mb-12 section-title">"My Projects"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS.iter().map(|p| view! { <ProjectCard project=p /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="flex flex-col bg-brightBlack/30 rounded-lg overflow-hidden border border-muted/30">
            <img src=project.image alt=project.title class="h-48 w-full object-cover" />
            <div class="flex flex-col flex-grow p-6">
                <h3 class="text-lg font-bold mb-2">{project.title}</h3>
                {project
                    .description
                    .iter()
                    .map(|line| view! { <p class="text-sm mb-2">{*line}</p> })
                    .collect_view()}
                {project
                    .in_progress
                    .then(|| view! { <p class="text-red font-bold mb-2">"Yet to be completed"</p> })}
                <div class="flex gap-4 mt-auto pt-4">
                    <a href=project.demo target="_blank" class="text-cyan hover:text-brightCyan">
                        <i class="extra-eye" />
                        " Demo"
                    </a>
                    <a href=project.source target="_blank" class="text-cyan hover:text-brightCyan">
                        <i class="devicon-github-plain" />
                        " GitHub"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="py-16">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-2xl font-bold text-center mb-12 section-title">"My Services"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {SERVICES
                        .into_iter()
                        .map(|(icon, title, blurb)| {
                            view! {
                                <div class="bg-brightBlack/30 p-6 rounded-lg text-center">
                                    <i class=format!("{icon} text-4xl text-cyan") />
                                    <h4 class="font-bold my-4">{title}</h4>
                                    <p class="text-sm">{blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

use std::rc::Rc;

use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_web::MakeWebConsoleWriter;
use web_sys::window;
use yew::prelude::*;

use crate::browser::{BrowserSections, BrowserTheme, ScrollListener};
use crate::content::{card_views, CardView, COPYRIGHT_YEAR, PERSONAL_INFO, PROFILE_IMAGE, PROJECTS};
use crate::navigation::{navigate_to, sample_scroll, NavAction, NavigationState, Section};
use crate::theme::{apply_initial_theme, resolve_theme, toggle_theme, Theme};

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
struct ThemeToggleProps {
    theme: Theme,
    on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <button
            class="dark-mode-toggle"
            type="button"
            aria-label={props.theme.toggle_label()}
            aria-pressed={props.theme.is_dark().to_string()}
            {onclick}
        >
            <span class="toggle-track">
                <span class="toggle-thumb" aria-hidden="true">{props.theme.icon()}</span>
            </span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    card: CardView,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let hovered = use_state(|| false);
    let project = &props.card.project;

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <article class="project-card" {onmouseenter} {onmouseleave}>
            if let Some(badge) = props.card.badge {
                <div class="featured-badge">{badge}</div>
            }

            <div class="project-image">
                <img
                    src={project.image}
                    alt={project.title}
                    class={classes!((*hovered).then_some("hovered"))}
                    loading="lazy"
                />
                <div class="project-overlay">
                    <div class="project-gradient"></div>
                </div>
            </div>

            <div class="project-content">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.description}</p>

                <ul class="project-technologies">
                    { for project.technologies.iter().enumerate().map(|(index, tech)| html! {
                        <li key={index} class="tech-tag">{*tech}</li>
                    }) }
                </ul>

                <div class="project-actions">
                    <a
                        class="btn btn-secondary"
                        href={project.github_url}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <span>{"Code"}</span>
                        <span class="sr-only">{" (opens in a new tab)"}</span>
                    </a>
                </div>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    nav: NavigationState,
    theme: Theme,
    on_navigate: Callback<Section>,
    on_toggle_menu: Callback<()>,
    on_toggle_theme: Callback<()>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let nav_button = |section: Section, class: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(section));
        html! {
            <button
                key={section.id()}
                type="button"
                class={classes!(class, props.nav.is_active(section).then_some("active"))}
                {onclick}
            >
                {section.label()}
            </button>
        }
    };

    let on_menu_click = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };

    html! {
        <nav class="navbar">
            <div class="nav-container">
                <div class="nav-content">
                    <div class="logo">
                        <span class="logo-text">{"Portfolio"}</span>
                    </div>

                    <div class="nav-desktop">
                        { for Section::ALL.into_iter().map(|section| nav_button(section, "nav-link")) }
                        <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                    </div>

                    <div class="nav-mobile-controls">
                        <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                        <button
                            class="nav-mobile-toggle"
                            type="button"
                            aria-label={if props.nav.is_menu_open { "Close menu" } else { "Open menu" }}
                            aria-expanded={props.nav.is_menu_open.to_string()}
                            onclick={on_menu_click}
                        >
                            {if props.nav.is_menu_open { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            if props.nav.is_menu_open {
                <div class="nav-mobile">
                    <div class="nav-mobile-content">
                        { for Section::ALL.into_iter().map(|section| nav_button(section, "nav-mobile-link")) }
                    </div>
                </div>
            }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct SectionLinkProps {
    on_navigate: Callback<Section>,
}

#[function_component(Hero)]
fn hero(props: &SectionLinkProps) -> Html {
    let go_to = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(section))
    };

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-content">
                <div class="hero-avatar">
                    <img src={PROFILE_IMAGE} alt="Profile" class="avatar-img" />
                </div>

                <h1 class="hero-title">
                    {"Hi, I'm "}<span class="hero-name">{PERSONAL_INFO.name}</span>
                </h1>

                <p class="hero-bio">{PERSONAL_INFO.bio}</p>

                <div class="hero-actions">
                    <button type="button" class="btn btn-primary btn-large" onclick={go_to(Section::Projects)}>
                        {"View My Projects"}
                    </button>
                    <button type="button" class="btn btn-outline btn-large" onclick={go_to(Section::Contact)}>
                        {"Get In Touch"}
                    </button>
                </div>

                <div class="hero-social">
                    <a class="social-link" href={PERSONAL_INFO.mailto_href()} aria-label="Email">{"✉"}</a>
                    <a class="social-link" href={PERSONAL_INFO.github_url()} target="_blank" rel="noopener noreferrer" aria-label="GitHub">{"GitHub"}</a>
                    <a class="social-link" href={PERSONAL_INFO.linkedin_url()} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">{"LinkedIn"}</a>
                </div>

                <button type="button" class="hero-scroll" aria-label="Scroll to projects" onclick={go_to(Section::Projects)}>
                    {"⌄"}
                </button>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectsSectionProps {
    cards: Rc<Vec<CardView>>,
}

#[function_component(ProjectsSection)]
fn projects_section(props: &ProjectsSectionProps) -> Html {
    html! {
        <section id={Section::Projects.id()} class="projects">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{"My Projects"}</h2>
                    <div class="section-divider"></div>
                    <p class="section-subtitle">
                        {"Here are some of the projects I've worked on. Each one represents a different challenge and learning experience."}
                    </p>
                </div>

                <div class="projects-grid">
                    { for props.cards.iter().map(|card| html! {
                        <ProjectCard key={card.key.clone()} card={card.clone()} />
                    }) }
                </div>

                <div class="projects-footer">
                    <p class="footer-text">{"Want to see more of my work?"}</p>
                    <a class="btn btn-outline" href={PERSONAL_INFO.github_url()} target="_blank" rel="noopener noreferrer">
                        <span>{"View All Projects on GitHub"}</span>
                        <span class="external-mark" aria-hidden="true">{"↗"}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    html! {
        <section id={Section::Contact.id()} class="contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{"Let's Connect"}</h2>
                    <div class="section-divider"></div>
                    <p class="section-subtitle">{"Interested in working together? I'd love to hear from you."}</p>
                </div>

                <div class="contact-grid">
                    <a class="contact-card" href={PERSONAL_INFO.mailto_href()}>
                        <h3 class="contact-title">{"Email"}</h3>
                        <p class="contact-text">{PERSONAL_INFO.email}</p>
                    </a>
                    <a class="contact-card" href={PERSONAL_INFO.github_url()} target="_blank" rel="noopener noreferrer">
                        <h3 class="contact-title">{"GitHub"}</h3>
                        <p class="contact-text">{PERSONAL_INFO.github}</p>
                    </a>
                    <a class="contact-card" href={PERSONAL_INFO.linkedin_url()} target="_blank" rel="noopener noreferrer">
                        <h3 class="contact-title">{"LinkedIn"}</h3>
                        <p class="contact-text">{PERSONAL_INFO.linkedin}</p>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(|| resolve_theme(&BrowserTheme));
    let nav = use_reducer(NavigationState::default);
    let cards = use_memo((), |_| card_views(PROJECTS));

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_initial_theme(&BrowserTheme, current);
            || ()
        });
    }

    {
        let dispatcher = nav.dispatcher();
        use_effect_with((), move |_| {
            let listener = ScrollListener::attach(move || {
                dispatcher.dispatch(sample_scroll(&BrowserSections));
            });
            if listener.is_none() {
                tracing::warn!("scroll listener could not be attached");
            }
            move || drop(listener)
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| theme.set(toggle_theme(&BrowserTheme, *theme)))
    };

    let on_navigate = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |section: Section| {
            dispatcher.dispatch(navigate_to(&BrowserSections, section));
        })
    };

    let on_toggle_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(NavAction::ToggleMenu))
    };

    html! {
        <div class="portfolio">
            <NavBar
                nav={*nav}
                theme={*theme}
                on_navigate={on_navigate.clone()}
                {on_toggle_menu}
                {on_toggle_theme}
            />
            <main>
                <Hero on_navigate={on_navigate} />
                <ProjectsSection {cards} />
                <ContactSection />
            </main>
            <footer class="footer">
                <div class="container">
                    <p class="footer-text">{PERSONAL_INFO.copyright_line(COPYRIGHT_YEAR)}</p>
                </div>
            </footer>
        </div>
    }
}

fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    tracing_subscriber::registry()
        .with(EnvFilter::new("warn,portfolio_showcase=debug"))
        .with(fmt_layer)
        .init();
}

pub fn run() {
    init_logging();

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::browser::{current_year, prefers_reduced_motion};
use super::effects::{mount_animation, LottieAnimation};
use crate::animation::{AnimationHandle, Decoration};
use crate::config::SiteConfig;
use crate::filter::filter_projects;
use crate::projects::{
    Project, CONTACT_LINKS, FOCUS_AREAS, OWNER_NAME, OWNER_TAGLINE, PROJECTS, SKILLS,
};
use crate::sections::Section;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: Section,
    pub theme: Theme,
    pub on_toggle_theme: Callback<MouseEvent>,
    pub on_navigate: Callback<Section>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let links = Section::NAV.into_iter().map(|section| {
        let is_active = props.active == section;
        let onclick = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(section))
        };

        html! {
            <button
                key={section.id()}
                type="button"
                class={classes!("nav-link", is_active.then_some("is-active"))}
                aria-current={is_active.then(|| AttrValue::from("true"))}
                onclick={onclick}
            >
                {section.label()}
            </button>
        }
    });

    html! {
        <nav class="site-nav" aria-label="Main navigation">
            <div class="identity">
                <h1>{OWNER_NAME}</h1>
                <p class="muted small">{OWNER_TAGLINE}</p>
            </div>
            <div class="nav-actions">
                <div class="nav-links">{ for links }</div>
                <button
                    class="theme-toggle"
                    type="button"
                    aria-label={props.theme.toggle_label()}
                    aria-pressed={props.theme.is_dark().to_string()}
                    onclick={props.on_toggle_theme.clone()}
                >
                    {props.theme.button_text()}
                </button>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub config: Rc<SiteConfig>,
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let jump = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(section))
    };

    html! {
        <section id={Section::Home.id()} class="hero" aria-labelledby="hero-heading">
            <div class="hero-copy">
                <h2 id="hero-heading">{"Building intelligent systems that understand, reason, and assist."}</h2>
                <p class="lead">
                    {"I design and ship NLP and LLM-powered applications: RAG systems, semantic search, and multimodal assistants, with a focus on clean code, reproducibility, and deployable demos."}
                </p>
                <div class="hero-actions">
                    <button class="button primary" type="button" onclick={jump(Section::Projects)}>{"See work"}</button>
                    <button class="button ghost" type="button" onclick={jump(Section::Contact)}>{"Contact"}</button>
                </div>
            </div>
            <div class="hero-visual">
                <DecorativeAnimation config={props.config.clone()} />
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct DecorativeAnimationProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(DecorativeAnimation)]
pub fn decorative_animation(props: &DecorativeAnimationProps) -> Html {
    let container = use_node_ref();
    let fallback_visible = use_state(|| true);

    {
        let container = container.clone();
        let fallback_visible = fallback_visible.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let cancelled = Rc::new(Cell::new(false));
            let decoration = Rc::new(RefCell::new(Decoration::<LottieAnimation>::Fallback));

            if !prefers_reduced_motion() {
                let cancelled = cancelled.clone();
                let decoration = decoration.clone();
                spawn_local(async move {
                    let result = mount_animation(&config, &container).await;

                    if cancelled.get() {
                        if let Ok(mut animation) = result {
                            animation.destroy();
                        }
                        return;
                    }

                    let mounted = Decoration::from_result(result);
                    fallback_visible.set(mounted.fallback_visible());
                    *decoration.borrow_mut() = mounted;
                });
            }

            move || {
                cancelled.set(true);
                decoration.borrow_mut().release();
            }
        });
    }

    html! {
        <div class="animation-frame">
            <div class="animation-canvas" ref={container} />
            <div
                class={classes!("animation-fallback", (!*fallback_visible).then_some("is-hidden"))}
                aria-hidden="true"
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectGalleryProps {
    pub config: Rc<SiteConfig>,
    pub query: AttrValue,
    pub on_query: Callback<String>,
}

#[function_component(ProjectGallery)]
pub fn project_gallery(props: &ProjectGalleryProps) -> Html {
    let visible = filter_projects(PROJECTS, &props.query);

    let oninput = {
        let on_query = props.on_query.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_query.emit(input.value());
        })
    };

    html! {
        <section id={Section::Projects.id()} class="section-block" aria-labelledby="projects-heading">
            <div class="section-header">
                <h3 id="projects-heading">{"Projects"}</h3>
                <input
                    class="search"
                    type="search"
                    value={props.query.clone()}
                    oninput={oninput}
                    placeholder="Search projects or tech..."
                    aria-label="Filter projects"
                />
            </div>
            if visible.is_empty() {
                <p class="muted empty-state">{format!("No projects match \"{}\".", props.query)}</p>
            } else {
                <div class="project-grid">
                    { for visible.into_iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard
                            key={project.id}
                            project={project}
                            delay={AttrValue::from(props.config.card_delay(index))}
                        />
                    }) }
                </div>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
    pub delay: AttrValue,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;

    html! {
        <article class="project-card" style={props.delay.clone()}>
            <h4>{project.title}</h4>
            <p class="muted">{project.description}</p>
            <ul class="tag-list">
                { for project.stack.iter().map(|tag| html! { <li key={*tag} class="tag">{*tag}</li> }) }
            </ul>
            <div class="card-actions">
                if let Some(repo) = project.repo {
                    <a class="button ghost small" href={repo} target="_blank" rel="noreferrer">{"View Repo"}</a>
                }
                if let Some(demo) = project.demo {
                    <a class="button primary small" href={demo} target="_blank" rel="noreferrer">{"Live"}</a>
                } else {
                    <span class="muted small">{"No demo"}</span>
                }
            </div>
        </article>
    }
}

#[function_component(SkillsGrid)]
pub fn skills_grid() -> Html {
    html! {
        <section id={Section::Skills.id()} class="section-block" aria-labelledby="skills-heading">
            <h3 id="skills-heading">{"Skills & Tools"}</h3>
            <div class="skill-grid">
                { for SKILLS.iter().map(|skill| html! { <div key={*skill} class="skill-chip">{*skill}</div> }) }
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id={Section::About.id()} class="section-block" aria-labelledby="about-heading">
            <h3 id="about-heading">{"About"}</h3>
            <p>
                {"Hi, I'm "}<strong>{OWNER_NAME}</strong>
                {", an AI Engineer focused on practical NLP and LLM systems. I build end-to-end applications that combine data pipelines, embeddings, RAG, and multimodal interfaces, with reproducible notebooks, clean engineering, and deployable demos."}
            </p>
            <ul class="focus-list">
                { for FOCUS_AREAS.iter().map(|area| html! { <li key={*area}>{*area}</li> }) }
            </ul>
        </section>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section id={Section::Contact.id()} class="section-block" aria-labelledby="contact-heading">
            <h3 id="contact-heading">{"Contact"}</h3>
            { for CONTACT_LINKS.iter().map(|link| {
                let external = link.href.starts_with("http");
                html! {
                    <p key={link.label}>
                        {format!("{}: ", link.label)}
                        <a
                            class="link"
                            href={link.href}
                            target={external.then(|| AttrValue::from("_blank"))}
                            rel={external.then(|| AttrValue::from("noreferrer"))}
                        >
                            {link.text}
                        </a>
                    </p>
                }
            }) }
        </section>
    }
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    html! {
        <footer class="site-footer muted small">
            {format!("© {} {OWNER_NAME}, AI Engineer", current_year())}
        </footer>
    }
}

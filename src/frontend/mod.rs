mod browser;
mod components;
mod effects;

use web_sys::window;
use yew::prelude::*;

use browser::{
    apply_theme, apply_theme_with_transition, prefers_reduced_motion, scroll_to_section,
    system_prefers_dark, LocalThemeStore,
};
use components::{AboutSection, ContactSection, Hero, NavBar, ProjectGallery, SiteFooter, SkillsGrid};
use effects::{PointerLoop, SectionObserver};

use crate::config::SiteConfig;
use crate::sections::Section;
use crate::theme::ThemeController;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| SiteConfig::default());
    let controller = {
        let key = config.theme_key;
        use_mut_ref(move || ThemeController::load(LocalThemeStore::new(key), system_prefers_dark()))
    };
    let theme = {
        let controller = controller.clone();
        use_state(move || controller.borrow().current())
    };
    let active_section = use_state(|| Section::Home);
    let query = use_state(String::new);
    let cursor_ref = use_node_ref();
    let parallax_ref = use_node_ref();

    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            let controller = controller.borrow();
            apply_theme(controller.current());
            controller.persist();
            || ()
        });
    }

    {
        let active_section = active_section.clone();
        let band = config.trigger_band;
        use_effect_with((), move |_| {
            let observer = SectionObserver::observe(&band, move |section| active_section.set(section));
            move || drop(observer)
        });
    }

    {
        let config = config.clone();
        let cursor = cursor_ref.clone();
        let parallax = parallax_ref.clone();
        use_effect_with((), move |_| {
            let task = if prefers_reduced_motion() {
                None
            } else {
                PointerLoop::start(&config, cursor, parallax)
            };

            move || {
                if let Some(task) = task {
                    task.stop();
                }
            }
        });
    }

    let on_toggle_theme = {
        let controller = controller.clone();
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = controller.borrow_mut().toggle();
            apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    let on_navigate = Callback::from(|section: Section| {
        scroll_to_section(section, !prefers_reduced_motion());
    });

    let on_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    html! {
        <>
            <a class="skip-link" href="#projects">{"Skip to projects"}</a>
            <div class="parallax-layer" ref={parallax_ref} aria-hidden="true" />
            <div class="cursor-dot" ref={cursor_ref} aria-hidden="true" />
            <div class="page-shell">
                <NavBar
                    active={*active_section}
                    theme={*theme}
                    on_toggle_theme={on_toggle_theme}
                    on_navigate={on_navigate.clone()}
                />
                <main>
                    <Hero config={config.clone()} on_navigate={on_navigate} />
                    <ProjectGallery
                        config={config.clone()}
                        query={AttrValue::from((*query).clone())}
                        on_query={on_query}
                    />
                    <SkillsGrid />
                    <AboutSection />
                    <ContactSection />
                </main>
                <SiteFooter />
            </div>
        </>
    }
}

pub fn run() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}

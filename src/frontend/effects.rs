use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo_net::http::Request;
use js_sys::{Array, Function, Object, Promise, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    window, Element, HtmlElement, HtmlScriptElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
};
use yew::NodeRef;

use super::browser::{describe_js_error, viewport_size};
use crate::animation::{AnimationDocument, AnimationError, AnimationHandle};
use crate::config::SiteConfig;
use crate::pointer::{parallax_offset, translate, PointerFollower};
use crate::sections::{ScrollSpy, Section, TriggerBand};

/// Watches the section anchors and reports the section entering the trigger
/// band. Disconnects on drop.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl SectionObserver {
    pub fn observe<F>(band: &TriggerBand, on_change: F) -> Option<Self>
    where
        F: Fn(Section) + 'static,
    {
        let document = window()?.document()?;
        let mut spy = ScrollSpy::default();

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let batch: Vec<(Section, bool)> = entries
                    .iter()
                    .filter_map(|entry| {
                        let entry = entry.dyn_into::<IntersectionObserverEntry>().ok()?;
                        let section = Section::from_id(&entry.target().id())?;
                        Some((section, entry.is_intersecting()))
                    })
                    .collect();

                if let Some(section) = spy.observe(batch) {
                    on_change(section);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&band.root_margin());
        options.set_threshold(&JsValue::from_f64(0.0));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;

        for section in Section::ALL {
            if let Some(element) = document.get_element_by_id(section.id()) {
                observer.observe(&element);
            }
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Per-frame cursor easing and parallax drift. Runs until `stop`.
pub struct PointerLoop {
    follower: RefCell<PointerFollower>,
    frame: RefCell<Option<AnimationFrame>>,
    listener: RefCell<Option<EventListener>>,
    parallax_range: (f64, f64),
    cursor: NodeRef,
    parallax: NodeRef,
}

impl PointerLoop {
    pub fn start(config: &SiteConfig, cursor: NodeRef, parallax: NodeRef) -> Option<Rc<Self>> {
        let window = window()?;
        let task = Rc::new(Self {
            follower: RefCell::new(PointerFollower::from_config(config)),
            frame: RefCell::new(None),
            listener: RefCell::new(None),
            parallax_range: config.parallax_range,
            cursor,
            parallax,
        });

        let weak = Rc::downgrade(&task);
        let listener = EventListener::new(&window, "mousemove", move |event| {
            let (Some(task), Some(event)) = (weak.upgrade(), event.dyn_ref::<MouseEvent>()) else {
                return;
            };
            task.follower
                .borrow_mut()
                .set_target(f64::from(event.client_x()), f64::from(event.client_y()));
        });
        *task.listener.borrow_mut() = Some(listener);

        task.schedule();
        Some(task)
    }

    fn schedule(self: &Rc<Self>) {
        let task = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            task.frame.borrow_mut().take();
            task.render_frame();
            task.schedule();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn render_frame(&self) {
        let mut follower = self.follower.borrow_mut();
        follower.step();
        set_transform(&self.cursor, &follower.cursor_transform());

        let (px, py) = parallax_offset(follower.target(), viewport_size(), self.parallax_range);
        set_transform(&self.parallax, &translate(px, py));
    }

    pub fn stop(&self) {
        self.listener.borrow_mut().take();
        self.frame.borrow_mut().take();
    }
}

fn set_transform(node: &NodeRef, value: &str) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let _ = element.style().set_property("transform", value);
    }
}

pub struct LottieAnimation {
    handle: JsValue,
}

impl AnimationHandle for LottieAnimation {
    fn destroy(&mut self) {
        if let Ok(destroy) = Reflect::get(&self.handle, &JsValue::from_str("destroy"))
            .and_then(|value| value.dyn_into::<Function>())
        {
            let _ = destroy.call0(&self.handle);
        }
    }
}

pub async fn mount_animation(
    config: &SiteConfig,
    container: &NodeRef,
) -> Result<LottieAnimation, AnimationError> {
    let lottie = acquire_renderer(config.animation_script_src).await?;
    let data = fetch_document(config.animation_path).await?;
    let container = container
        .cast::<Element>()
        .ok_or_else(|| AnimationError::Render("animation container is not mounted".to_string()))?;

    render(&lottie, &container, data)
}

async fn acquire_renderer(script_src: &str) -> Result<JsValue, AnimationError> {
    if let Some(lottie) = lottie_global() {
        return Ok(lottie);
    }

    load_script(script_src).await?;
    lottie_global().ok_or(AnimationError::Unavailable)
}

fn lottie_global() -> Option<JsValue> {
    let window: JsValue = window()?.into();
    let lottie = Reflect::get(&window, &JsValue::from_str("lottie")).ok()?;
    let load = Reflect::get(&lottie, &JsValue::from_str("loadAnimation")).ok()?;

    load.is_function().then_some(lottie)
}

async fn load_script(src: &str) -> Result<(), AnimationError> {
    let unavailable = || AnimationError::ScriptUnavailable(src.to_string());

    let document = window().and_then(|w| w.document()).ok_or_else(unavailable)?;
    let head = document.head().ok_or_else(unavailable)?;
    let script = document
        .create_element("script")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlScriptElement>().ok())
        .ok_or_else(unavailable)?;
    script.set_src(src);
    script.set_async(true);

    let loaded = Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });

    head.append_child(&script).map_err(|_| unavailable())?;
    JsFuture::from(loaded).await.map_err(|_| unavailable())?;
    Ok(())
}

async fn fetch_document(path: &str) -> Result<JsValue, AnimationError> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|err| AnimationError::Fetch(err.to_string()))?;

    if !response.ok() {
        return Err(AnimationError::Fetch(format!(
            "{path} answered {}",
            response.status()
        )));
    }

    let raw = response
        .text()
        .await
        .map_err(|err| AnimationError::Fetch(err.to_string()))?;
    let document = AnimationDocument::parse(&raw)?;
    log::debug!(
        "animation document {path}: {} layers, {:.1}s loop",
        document.layers.len(),
        document.duration_seconds()
    );

    js_sys::JSON::parse(&raw).map_err(|err| AnimationError::Render(describe_js_error(&err)))
}

fn render(
    lottie: &JsValue,
    container: &Element,
    data: JsValue,
) -> Result<LottieAnimation, AnimationError> {
    let render_error = |err: JsValue| AnimationError::Render(describe_js_error(&err));

    let options = Object::new();
    let fields: [(&str, JsValue); 5] = [
        ("container", container.clone().into()),
        ("renderer", JsValue::from_str("svg")),
        ("loop", JsValue::TRUE),
        ("autoplay", JsValue::TRUE),
        ("animationData", data),
    ];
    for (key, value) in fields {
        Reflect::set(&options, &JsValue::from_str(key), &value).map_err(render_error)?;
    }

    let load = Reflect::get(lottie, &JsValue::from_str("loadAnimation"))
        .map_err(render_error)?
        .dyn_into::<Function>()
        .map_err(|_| AnimationError::Unavailable)?;
    let handle = load.call1(lottie, &options).map_err(render_error)?;

    Ok(LottieAnimation { handle })
}

use anyhow::{anyhow, Error, Result};
use leptos::leptos_dom::helpers::document;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// Content elements that slide up as they enter the viewport.
const CARD_SELECTOR: &str = ".feature-card, .doc-section";
/// Fraction of an element that must be visible before it reveals.
const REVEAL_THRESHOLD: f64 = 0.1;
/// Pulls the reveal trigger 50px above the viewport bottom.
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Container whose contents never animate.
const HERO_SELECTOR: &str = ".hero";

/// Wires up both reveal observers against the rendered document. Absence of
/// matching elements is a no-op.
pub fn init() -> Result<()> {
    observe_images()?;
    observe_cards()
}

fn js_error(what: &str, err: &JsValue) -> Error {
    anyhow!("{what}: {err:?}")
}

fn in_hero(element: &Element) -> bool {
    element.closest(HERO_SELECTOR).ok().flatten().is_some()
}

/// All elements matching `selector`, skipping nodes that are not HTML
/// elements.
fn collect(selector: &str) -> Result<Vec<HtmlElement>> {
    let nodes = document()
        .query_selector_all(selector)
        .map_err(|err| js_error("selector query failed", &err))?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(el) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            elements.push(el);
        }
    }
    Ok(elements)
}

/// Fades each non-hero image in once it has loaded, the first time it scrolls
/// into view. Observation stops after the first intersection, so the effect
/// never re-triggers.
fn observe_images() -> Result<()> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            {
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                if let Ok(image) = target.dyn_into::<HtmlElement>() {
                    fade_in_on_load(&image);
                }
            }
        },
    );
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|err| js_error("failed to create image observer", &err))?;
    // The observer and its callback live for the rest of the page.
    callback.forget();

    for image in collect("img[src]")? {
        if !in_hero(&image) {
            observer.observe(&image);
        }
    }
    Ok(())
}

/// Hides the image until its load event fires, then restores full opacity.
fn fade_in_on_load(image: &HtmlElement) {
    let style = image.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transition", "opacity 0.5s");

    let shown = image.clone();
    let on_load = Closure::<dyn FnMut()>::new(move || {
        let _ = shown.style().set_property("opacity", "1");
    });
    image.set_onload(Some(on_load.as_ref().unchecked_ref()));
    on_load.forget();
}

/// Slides non-hero feature cards and doc sections up into view on their first
/// intersection, then stops observing them.
fn observe_cards() -> Result<()> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            {
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                if let Ok(card) = target.dyn_into::<HtmlElement>() {
                    let style = card.style();
                    let _ = style.set_property("opacity", "1");
                    let _ = style.set_property("transform", "translateY(0)");
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| js_error("failed to create reveal observer", &err))?;
    callback.forget();

    for card in collect(CARD_SELECTOR)? {
        if in_hero(&card) {
            continue;
        }
        let style = card.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(20px)");
        let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
        observer.observe(&card);
    }
    Ok(())
}

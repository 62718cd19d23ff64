use crate::constants::{
    ACTIVE_CLASS, CONTENT_SELECTOR, NAV_LINK_SELECTOR, NAV_PULSE_MS, NAV_PULSE_SCALE,
    NAV_REST_SCALE, SECTION_SELECTOR,
};
use crate::dom;
use crate::sections::{section_element_id, section_key_for_link, DEFAULT_SECTION, SECTIONS};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Build the content panels and hook up the nav bar.
///
/// `on_navigate` runs on every nav click, after the panels switch.
pub fn wire_navigation(document: &web::Document, on_navigate: impl Fn() + 'static) {
    let Some(content) = query_html(document, CONTENT_SELECTOR) else {
        log::warn!("[nav] no {CONTENT_SELECTOR} container, skipping navigation");
        return;
    };
    if let Err(e) = inject_sections(document, &content) {
        log::warn!("[nav] could not build sections: {e:?}");
        return;
    }

    let links = match document.query_selector_all(NAV_LINK_SELECTOR) {
        Ok(l) => l,
        Err(e) => {
            log::warn!("[nav] bad selector {NAV_LINK_SELECTOR}: {e:?}");
            return;
        }
    };
    let on_navigate = std::rc::Rc::new(on_navigate);
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        if i == 0 {
            _ = link.class_list().add_1(ACTIVE_CLASS);
        }
        let document = document.clone();
        let content = content.clone();
        let link_for_click = link.clone();
        let on_navigate = on_navigate.clone();
        dom::add_listener(&link, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let text = link_for_click.text_content().unwrap_or_default();
            let Some(key) = section_key_for_link(&text) else {
                log::debug!("[nav] no section for link {text:?}");
                return;
            };
            activate(&document, &link_for_click, key);
            on_navigate();
            pulse(&content);
        });
    }
    log::info!("[nav] {} links wired", links.length());
}

fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn inject_sections(
    document: &web::Document,
    content: &web::HtmlElement,
) -> Result<(), wasm_bindgen::JsValue> {
    content.set_inner_html("");
    for section in SECTIONS.iter() {
        let div = document.create_element("div")?;
        div.set_class_name("content-section");
        div.set_id(&section_element_id(section.key));
        if section.key == DEFAULT_SECTION {
            div.class_list().add_1(ACTIVE_CLASS)?;
        }
        let h2 = document.create_element("h2")?;
        h2.set_text_content(Some(section.title));
        let p = document.create_element("p")?;
        p.set_text_content(Some(section.body));
        div.append_child(&h2)?;
        div.append_child(&p)?;
        content.append_child(&div)?;
    }
    Ok(())
}

fn activate(document: &web::Document, link: &web::Element, key: &str) {
    for selector in [NAV_LINK_SELECTOR, SECTION_SELECTOR] {
        if let Ok(nodes) = document.query_selector_all(selector) {
            for i in 0..nodes.length() {
                if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                    _ = el.class_list().remove_1(ACTIVE_CLASS);
                }
            }
        }
    }
    _ = link.class_list().add_1(ACTIVE_CLASS);
    if let Some(section) = document.get_element_by_id(&section_element_id(key)) {
        _ = section.class_list().add_1(ACTIVE_CLASS);
    }
}

fn pulse(content: &web::HtmlElement) {
    _ = content.style().set_property("transform", NAV_PULSE_SCALE);
    let content = content.clone();
    dom::set_timeout(NAV_PULSE_MS, move || {
        _ = content.style().set_property("transform", NAV_REST_SCALE);
    });
}

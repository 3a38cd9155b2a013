//! DOM bindings
//!
//! Looks up the card's elements once and applies [`WidgetEvent`]s to them.

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::consts::{EMPHASIS_CAP, FLOURISH_FILTER};
use crate::sim::{ConfettiBurst, Viewport, WidgetEvent};

const CONFIRMED_CLASS: &str = "is-confirmed";
const HIDDEN_CLASS: &str = "hidden";
const PULSE_CLASS: &str = "pulse";
const TOAST_VISIBLE_CLASS: &str = "show";

/// Elements the widget writes to
pub struct Dom {
    pub document: Document,
    pub card: Element,
    pub yes_btn: HtmlElement,
    pub no_btn: HtmlElement,
    pub message: Option<Element>,
    pub retry_btn: Option<HtmlElement>,
    pub dodge_count: Option<Element>,
    pub toast: Option<Element>,
}

fn required(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))
}

fn required_html(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    required(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an HTML element")))
}

impl Dom {
    /// Find `card`, `yesBtn` and `noBtn`; the rest are optional
    pub fn lookup(document: Document) -> Result<Self, JsValue> {
        let card = required(&document, "card")?;
        let yes_btn = required_html(&document, "yesBtn")?;
        let no_btn = required_html(&document, "noBtn")?;

        let message = document.get_element_by_id("message");
        let retry_btn = document
            .get_element_by_id("retryBtn")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let dodge_count = document.get_element_by_id("dodgeCount");
        let toast = document.get_element_by_id("toast");

        Ok(Self {
            document,
            card,
            yes_btn,
            no_btn,
            message,
            retry_btn,
            dodge_count,
            toast,
        })
    }

    /// Current window size and evasive control size
    pub fn measure(&self, window: &Window) -> Viewport {
        let dimension =
            |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        Viewport::new(
            dimension(window.inner_width()),
            dimension(window.inner_height()),
            self.yes_btn.offset_width() as f32,
            self.yes_btn.offset_height() as f32,
        )
    }

    /// Write the evasive control's position
    pub fn render_position(&self, pos: Vec2) {
        let style = self.yes_btn.style();
        let _ = style.set_property("left", &format!("{}px", pos.x));
        let _ = style.set_property("top", &format!("{}px", pos.y));
    }

    pub fn apply(&self, event: &WidgetEvent) {
        match event {
            WidgetEvent::FlourishStarted(flourish) => {
                let style = self.yes_btn.style();
                let _ = style.set_property("transform", &flourish.transform());
                let _ = style.set_property("filter", FLOURISH_FILTER);
            }
            WidgetEvent::FlourishCleared => {
                let style = self.yes_btn.style();
                let _ = style.remove_property("transform");
                let _ = style.remove_property("filter");
            }
            WidgetEvent::DodgeCounted { count, emphasis } => {
                if let Some(el) = &self.dodge_count {
                    el.set_text_content(Some(&count.to_string()));
                }
                let glow = *emphasis as f32 / EMPHASIS_CAP as f32;
                let _ = self.no_btn.style().set_property("--glow", &format!("{:.3}", glow));
                if *count > 0 {
                    self.restart_pulse();
                }
            }
            WidgetEvent::ToastShown(text) => {
                if let Some(el) = &self.toast {
                    el.set_text_content(Some(*text));
                    let _ = el.class_list().add_1(TOAST_VISIBLE_CLASS);
                }
            }
            WidgetEvent::ToastHidden => {
                if let Some(el) = &self.toast {
                    let _ = el.class_list().remove_1(TOAST_VISIBLE_CLASS);
                }
            }
            WidgetEvent::Status(text) => {
                if let Some(el) = &self.message {
                    el.set_text_content(*text);
                }
            }
            WidgetEvent::Confirmed { show_retry } => {
                let _ = self.card.class_list().add_1(CONFIRMED_CLASS);
                if *show_retry {
                    let _ = self.yes_btn.class_list().add_1(HIDDEN_CLASS);
                    if let Some(btn) = &self.retry_btn {
                        let _ = btn.class_list().remove_1(HIDDEN_CLASS);
                    }
                }
            }
            WidgetEvent::Reset => {
                let _ = self.card.class_list().remove_1(CONFIRMED_CLASS);
                let _ = self.yes_btn.class_list().remove_1(HIDDEN_CLASS);
                let _ = self.no_btn.class_list().remove_1(PULSE_CLASS);
                if let Some(btn) = &self.retry_btn {
                    let _ = btn.class_list().add_1(HIDDEN_CLASS);
                }
            }
            WidgetEvent::ConfettiReleased(burst) => self.spawn_confetti(burst),
            WidgetEvent::ConfettiExpired(id) => self.remove_confetti(*id),
        }
    }

    /// Remove, force a layout read, then add so the CSS animation replays
    fn restart_pulse(&self) {
        let classes = self.no_btn.class_list();
        let _ = classes.remove_1(PULSE_CLASS);
        let _ = self.no_btn.offset_width();
        let _ = classes.add_1(PULSE_CLASS);
    }

    fn spawn_confetti(&self, burst: &ConfettiBurst) {
        for piece in &burst.pieces {
            let Ok(el) = self.document.create_element("span") else {
                log::warn!("Failed to create confetti element");
                return;
            };
            el.set_class_name("confetti");
            let _ = el.set_attribute("data-burst", &burst.id.to_string());
            if let Ok(el) = el.dyn_into::<HtmlElement>() {
                let style = el.style();
                let _ = style.set_property("background", piece.color);
                let _ = style.set_property("--tx", &format!("{}px", piece.travel.x));
                let _ = style.set_property("--ty", &format!("{}px", piece.travel.y));
                let _ = style.set_property("--rot", &format!("{}deg", piece.rotation_deg));
                let _ = self.card.append_child(&el);
            }
        }
    }

    fn remove_confetti(&self, id: u32) {
        let selector = format!(".confetti[data-burst=\"{id}\"]");
        if let Ok(nodes) = self.card.query_selector_all(&selector) {
            for i in 0..nodes.length() {
                if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    el.remove();
                }
            }
        }
    }
}

use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{FileList, HtmlElement, HtmlInputElement};
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// First image file in a dropped or pasted file list; non-image entries are
/// skipped with a warning.
pub fn first_image_file(file_list: &FileList) -> Option<GlooFile> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .find(|file| {
            if file.type_().starts_with("image/") {
                true
            } else {
                log::warn!("Skipping non-image file: {}", file.name());
                false
            }
        })
        .map(GlooFile::from)
}

/// Trimmed value of a bound text input, empty when the ref is unattached.
pub fn input_value(input_ref: &NodeRef) -> String {
    input_ref
        .cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
        .trim()
        .to_string()
}

pub fn alert(message: &str) {
    let _ = web_sys::window().unwrap().alert_with_message(message);
}

pub fn focus(node_ref: &NodeRef) {
    if let Some(element) = node_ref.cast::<HtmlElement>() {
        let _ = element.focus();
    }
}

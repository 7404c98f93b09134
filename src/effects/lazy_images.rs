use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

pub const LAZY_IMAGE_SELECTOR: &str = r#"img[loading="lazy"]"#;

/// Copies `data-src` into `src` for lazily loaded images.
pub fn load_lazy_images(document: &Document) {
    let Ok(images) = document.query_selector_all(LAZY_IMAGE_SELECTOR) else {
        return;
    };
    for i in 0..images.length() {
        let Some(img) = images.item(i).and_then(|n| n.dyn_into::<HtmlImageElement>().ok()) else {
            continue;
        };
        if let Some(src) = img.get_attribute("data-src") {
            img.set_src(&src);
        }
    }
}

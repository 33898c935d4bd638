use gloo::utils::window;
use js_sys::{Function, Object, Promise, Reflect};
use memento_core::{ShareCapability, ShareError, ShareMessage, Shared};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

const INTENT_URL: &str = "https://twitter.com/intent/tweet";

fn js_failure(err: JsValue) -> ShareError {
    ShareError::Failed(format!("{:?}", err))
}

/// Web Share API, where the browser provides `navigator.share`.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct NativeShare;

impl ShareCapability for NativeShare {
    fn share(&self, message: &ShareMessage) -> Result<Shared, ShareError> {
        let navigator = window().navigator();
        let share = Reflect::get(&navigator, &JsValue::from_str("share")).map_err(js_failure)?;
        let Some(share) = share.dyn_ref::<Function>() else {
            return Err(ShareError::Unavailable);
        };

        let data = Object::new();
        for (key, value) in [
            ("title", &message.title),
            ("text", &message.text),
            ("url", &message.url),
        ] {
            Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value))
                .map_err(js_failure)?;
        }

        let promise: Promise = share
            .call1(&navigator, &data)
            .map_err(js_failure)?
            .dyn_into()
            .map_err(js_failure)?;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::info!("share cancelled: {:?}", err);
            }
        });
        Ok(Shared::Sheet)
    }
}

/// Opens a pre-filled post in a new tab.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct IntentShare;

impl IntentShare {
    pub(crate) fn url(message: &ShareMessage) -> String {
        use js_sys::encode_uri_component;
        format!(
            "{}?text={}&url={}",
            INTENT_URL,
            String::from(encode_uri_component(&message.text)),
            String::from(encode_uri_component(&message.url)),
        )
    }
}

impl ShareCapability for IntentShare {
    fn share(&self, message: &ShareMessage) -> Result<Shared, ShareError> {
        let url = Self::url(message);
        match window().open_with_url_and_target(&url, "_blank") {
            Ok(Some(_)) => Ok(Shared::Link),
            Ok(None) => Err(ShareError::Failed("popup was blocked".to_string())),
            Err(err) => Err(js_failure(err)),
        }
    }
}

/// Address of the running game, shared alongside the score.
pub(crate) fn current_url() -> String {
    window().location().href().unwrap_or_else(|err| {
        log::warn!("could not read location: {:?}", err);
        String::new()
    })
}

// WebAssembly bindings for hosting the controller in a browser UI
use crate::config::ControllerConfig;
use crate::controller::{ChangeEvent, UnitValueController};
use crate::units::Unit;
use wasm_bindgen::prelude::*;

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize: {}", e)))
}

fn event_json(event: Option<ChangeEvent>) -> Result<Option<String>, JsValue> {
    event.as_ref().map(to_json).transpose()
}

#[wasm_bindgen]
pub struct UnitValueWasm {
    controller: UnitValueController,
}

#[wasm_bindgen]
impl UnitValueWasm {
    /// Create a controller. `config_json` uses the same keys as the TOML config.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<UnitValueWasm, JsValue> {
        let config = match config_json {
            Some(json) => serde_json::from_str::<ControllerConfig>(&json)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse config JSON: {}", e)))?,
            None => ControllerConfig::default(),
        };

        let controller = UnitValueController::new(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self { controller })
    }

    /// Register the change callback; it receives the event as a JSON string
    #[wasm_bindgen]
    pub fn set_on_change(&mut self, callback: js_sys::Function) {
        self.controller.set_observer(move |event| {
            let json = match serde_json::to_string(event) {
                Ok(json) => json,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to serialize change event");
                    return;
                }
            };
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                tracing::warn!(error = ?e, "change callback threw");
            }
        });
    }

    #[wasm_bindgen]
    pub fn focus(&mut self) {
        self.controller.focus();
    }

    #[wasm_bindgen]
    pub fn input(&mut self, text: &str) {
        self.controller.input(text);
    }

    #[wasm_bindgen]
    pub fn blur(&mut self) -> Result<Option<String>, JsValue> {
        event_json(self.controller.blur())
    }

    #[wasm_bindgen]
    pub fn increment(&mut self) -> Result<Option<String>, JsValue> {
        event_json(self.controller.increment())
    }

    #[wasm_bindgen]
    pub fn decrement(&mut self) -> Result<Option<String>, JsValue> {
        event_json(self.controller.decrement())
    }

    /// Accepts "%", "px", "percent" or "pixel"
    #[wasm_bindgen]
    pub fn set_unit(&mut self, unit: &str) -> Result<Option<String>, JsValue> {
        let unit = unit
            .parse::<Unit>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        event_json(self.controller.set_unit(unit))
    }

    #[wasm_bindgen]
    pub fn set_value(&mut self, value: f64) -> Result<Option<String>, JsValue> {
        let event = self
            .controller
            .set_value(value)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        event_json(event)
    }

    #[wasm_bindgen]
    pub fn value(&self) -> f64 {
        self.controller.value()
    }

    #[wasm_bindgen]
    pub fn text(&self) -> String {
        self.controller.text().to_string()
    }

    /// Full render state: value, unit, text, editing and both stepper controls
    #[wasm_bindgen]
    pub fn view(&self) -> Result<String, JsValue> {
        to_json(&self.controller.view())
    }
}

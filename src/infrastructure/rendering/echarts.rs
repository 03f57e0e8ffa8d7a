//! Bindings to the global `echarts` object and a small renderer around them.

use super::option::{EchartsOption, VOLUME_AXIS};
use crate::domain::errors::RenderingError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::time_utils::short_time_label;
use gloo::utils::format::JsValueSerdeExt;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `echarts.ECharts` instance
    #[derive(Debug, Clone)]
    pub type EchartsInstance;

    #[wasm_bindgen(catch, js_namespace = echarts, js_name = init)]
    fn echarts_init(dom: &web_sys::HtmlElement) -> Result<EchartsInstance, JsValue>;

    #[wasm_bindgen(catch, method, js_name = setOption)]
    fn set_option(this: &EchartsInstance, option: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn resize(this: &EchartsInstance);

    #[wasm_bindgen(method)]
    fn dispose(this: &EchartsInstance);
}

/// One ECharts instance bound to a container element.
#[derive(Debug, Clone)]
pub struct EchartsRenderer {
    instance: EchartsInstance,
}

impl EchartsRenderer {
    pub fn init(container: &web_sys::HtmlElement) -> Result<Self, RenderingError> {
        let instance = echarts_init(container).map_err(|e| RenderingError::Library(format!("init: {e:?}")))?;
        get_logger().info(LogComponent::Infrastructure("ECharts"), "📊 Chart instance created");
        Ok(Self { instance })
    }

    pub fn render(&self, option: &EchartsOption) -> Result<(), RenderingError> {
        let js_option = to_js_option(option)?;
        self.instance
            .set_option(&js_option)
            .map_err(|e| RenderingError::Library(format!("setOption: {e:?}")))
    }

    pub fn resize(&self) {
        self.instance.resize();
    }

    pub fn dispose(&self) {
        self.instance.dispose();
        get_logger().debug(LogComponent::Infrastructure("ECharts"), "🗑️ Chart instance disposed");
    }
}

/// Serialize `option` and attach the JS callbacks serde cannot express.
pub fn to_js_option(option: &EchartsOption) -> Result<JsValue, RenderingError> {
    let value = JsValue::from_serde(option).map_err(|e| RenderingError::Serialization(e.to_string()))?;
    attach_formatters(&value).map_err(|e| RenderingError::Library(format!("formatter: {e:?}")))?;
    Ok(value)
}

fn attach_formatters(option: &JsValue) -> Result<(), JsValue> {
    // Crosshair only, no tooltip box.
    let silent = Closure::<dyn Fn() -> String>::new(String::new).into_js_value();
    let tooltip = Reflect::get(option, &"tooltip".into())?;
    Reflect::set(&tooltip, &"formatter".into(), &silent)?;

    let short = Closure::<dyn Fn(String) -> String>::new(|value: String| short_time_label(&value)).into_js_value();
    let x_axes = Reflect::get(option, &"xAxis".into())?;
    let volume_axis = Reflect::get_u32(&x_axes, VOLUME_AXIS as u32)?;
    let label = Reflect::get(&volume_axis, &"axisLabel".into())?;
    Reflect::set(&label, &"formatter".into(), &short)?;
    Ok(())
}

//! content.json の読み込み
//!
//! CLIの `render` が出力した content.json をページと同じ場所から取得する。
//! 取得できない場合は組み込みの内容のまま表示する。

use portfolio_common::PortfolioContent;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub const CONTENT_URL: &str = "content.json";

pub async fn fetch_content(url: &str) -> Result<PortfolioContent, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let content: PortfolioContent = serde_wasm_bindgen::from_value(json)?;
    Ok(content)
}

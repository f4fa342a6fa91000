//! Image assets
//!
//! The four images must all load before any scene is built. There are no
//! fallback visuals: a missing image aborts startup.

use thiserror::Error;

/// Errors raised while preloading assets
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load image `{0}`")]
    LoadFailed(String),
    #[error("browser environment unavailable: {0}")]
    Environment(&'static str),
}

/// Named image resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    Player,
    Background,
    BasePlatform,
    Platform,
}

impl AssetId {
    pub const ALL: [AssetId; 4] = [
        AssetId::Player,
        AssetId::Background,
        AssetId::BasePlatform,
        AssetId::Platform,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            AssetId::Player => "player.png",
            AssetId::Background => "bg.png",
            AssetId::BasePlatform => "blockbase.png",
            AssetId::Platform => "blocktx.png",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AssetId::Player => 0,
            AssetId::Background => 1,
            AssetId::BasePlatform => 2,
            AssetId::Platform => 3,
        }
    }
}

/// Where the images live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    base_url: String,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self::new("assets/")
    }
}

impl AssetManifest {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.is_empty() && !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn url_for(&self, id: AssetId) -> String {
        format!("{}{}", self.base_url, id.file_name())
    }

    /// Load every image, failing on the first one that errors (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub async fn load(&self) -> Result<Assets, AssetError> {
        let mut images = Vec::with_capacity(AssetId::ALL.len());
        for id in AssetId::ALL {
            let url = self.url_for(id);
            images.push(load_image(&url).await?);
            log::info!("Loaded {}", url);
        }
        Ok(Assets { images })
    }
}

/// Loaded images, indexed by [`AssetId`]
#[cfg(target_arch = "wasm32")]
pub struct Assets {
    images: Vec<web_sys::HtmlImageElement>,
}

#[cfg(target_arch = "wasm32")]
impl Assets {
    pub fn get(&self, id: AssetId) -> &web_sys::HtmlImageElement {
        &self.images[id.index()]
    }
}

#[cfg(target_arch = "wasm32")]
async fn load_image(url: &str) -> Result<web_sys::HtmlImageElement, AssetError> {
    let image = web_sys::HtmlImageElement::new()
        .map_err(|_| AssetError::Environment("cannot construct Image"))?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(url);

    let loaded = wasm_bindgen_futures::JsFuture::from(promise).await;
    image.set_onload(None);
    image.set_onerror(None);
    loaded.map_err(|_| AssetError::LoadFailed(url.to_string()))?;

    Ok(image)
}

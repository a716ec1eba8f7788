//! Fullscreen image viewer state and its keyboard wiring.
//!
//! [`Lightbox`] is the pure index state: closed, or open on one file of the
//! current item with cyclic navigation in both directions. [`KeyBinding`]
//! owns the global `keydown` listener and guarantees it is attached only
//! while the viewer is open, and at most once.

use leptos::{ev, ev::KeyboardEvent, prelude::*};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    index: Option<usize>,
    len: usize,
}

impl Lightbox {
    /// A closed viewer over `len` files.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: None, len }
    }

    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    #[must_use]
    pub const fn file_count(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.index.is_some()
    }

    /// Opens on file `index`; out-of-range indexes are ignored.
    pub const fn open(&mut self, index: usize) {
        if index < self.len {
            self.index = Some(index);
        }
    }

    pub const fn close(&mut self) {
        self.index = None;
    }

    pub const fn next(&mut self) {
        if let Some(index) = self.index {
            self.index = Some((index + 1) % self.len);
        }
    }

    pub const fn previous(&mut self) {
        if let Some(index) = self.index {
            self.index = Some((index + self.len - 1) % self.len);
        }
    }

    /// `(next, previous)` indexes around the open file.
    #[must_use]
    pub const fn adjacent(&self) -> Option<(usize, usize)> {
        match self.index {
            Some(index) => Some(((index + 1) % self.len, (index + self.len - 1) % self.len)),
            None => None,
        }
    }

    pub const fn apply_key(&mut self, key: LightboxKey) {
        match key {
            LightboxKey::Close => self.close(),
            LightboxKey::Previous => self.previous(),
            LightboxKey::Next => self.next(),
        }
    }

    /// Position label such as `2 / 5`.
    #[must_use]
    pub fn counter(&self) -> Option<String> {
        self.index.map(|index| format!("{} / {}", index + 1, self.len))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Previous,
    Next,
}

impl LightboxKey {
    /// Maps a `KeyboardEvent.key` value onto a viewer command.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Something that can install and remove the viewer's key listener.
#[cfg_attr(test, mockall::automock)]
pub trait KeyListenerHost {
    fn attach(&mut self);
    fn detach(&mut self);
}

/// Keeps exactly one listener attached while the viewer is open.
pub struct KeyBinding<H: KeyListenerHost> {
    host: H,
    attached: bool,
}

impl<H: KeyListenerHost> KeyBinding<H> {
    pub const fn new(host: H) -> Self {
        Self {
            host,
            attached: false,
        }
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Attaches on the first `sync(true)`, detaches on `sync(false)`.
    /// Repeated calls with the same state do nothing.
    pub fn sync(&mut self, open: bool) {
        match (open, self.attached) {
            (true, false) => {
                self.host.attach();
                self.attached = true;
            }
            (false, true) => {
                self.host.detach();
                self.attached = false;
            }
            _ => {}
        }
    }
}

impl<H: KeyListenerHost> Drop for KeyBinding<H> {
    fn drop(&mut self) {
        self.sync(false);
    }
}

/// Escape on the detail page leaves it, but only when no viewer is open to
/// absorb the key.
#[must_use]
pub const fn leaves_detail(lightbox: &Lightbox, key: LightboxKey) -> bool {
    !lightbox.is_open() && matches!(key, LightboxKey::Close)
}

/// The detail page's two key listeners: the viewer's while the lightbox is
/// open, the page's otherwise. At most one is attached at a time.
pub struct DetailKeys<V: KeyListenerHost, P: KeyListenerHost> {
    viewer: KeyBinding<V>,
    page: KeyBinding<P>,
}

impl<V: KeyListenerHost, P: KeyListenerHost> DetailKeys<V, P> {
    pub const fn new(viewer: V, page: P) -> Self {
        Self {
            viewer: KeyBinding::new(viewer),
            page: KeyBinding::new(page),
        }
    }

    /// Hands the keyboard to the viewer or back to the page. The outgoing
    /// listener is removed before the incoming one is installed.
    pub fn sync(&mut self, lightbox_open: bool) {
        if lightbox_open {
            self.page.sync(false);
            self.viewer.sync(true);
        } else {
            self.viewer.sync(false);
            self.page.sync(true);
        }
    }

    pub fn release(&mut self) {
        self.viewer.sync(false);
        self.page.sync(false);
    }

    /// `(viewer, page)` attachment state.
    #[must_use]
    pub const fn attached(&self) -> (bool, bool) {
        (self.viewer.is_attached(), self.page.is_attached())
    }
}

/// Browser host: a `keydown` listener on `window`.
pub struct WindowKeyHost<F> {
    on_key: F,
    handle: Option<WindowListenerHandle>,
}

impl<F> WindowKeyHost<F>
where
    F: Fn(LightboxKey) + Clone + Send + Sync + 'static,
{
    pub const fn new(on_key: F) -> Self {
        Self {
            on_key,
            handle: None,
        }
    }
}

impl<F> KeyListenerHost for WindowKeyHost<F>
where
    F: Fn(LightboxKey) + Clone + Send + Sync + 'static,
{
    fn attach(&mut self) {
        let on_key = self.on_key.clone();
        self.handle = Some(window_event_listener(ev::keydown, move |event: KeyboardEvent| {
            if let Some(key) = LightboxKey::from_key(&event.key()) {
                event.prevent_default();
                on_key(key);
            }
        }));
    }

    fn detach(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.remove();
        }
    }
}

/// Starts loading `urls` into the browser cache so navigation feels instant.
pub fn warm_images<'a>(urls: impl IntoIterator<Item = &'a str>) {
    for url in urls {
        match web_sys::HtmlImageElement::new() {
            Ok(image) => image.set_src(url),
            Err(err) => leptos::logging::warn!("Could not preload {url}: {err:?}"),
        }
    }
}

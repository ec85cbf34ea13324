//! One shared `<style>` element carrying the spinner keyframes.
//!
//! Every mounted component holds a [`StyleGuard`]. The first guard inserts the
//! element, the last one dropped removes it, and an element already present in
//! the document is reused rather than duplicated.

use std::cell::RefCell;

pub const STYLE_ID: &str = "pull-to-refresh-styles";
pub const SPINNER_CLASS: &str = "ptr-spinner";

const SPINNER_CSS: &str = "
@keyframes ptr-spin {
  0% { transform: rotate(0deg); }
  100% { transform: rotate(360deg); }
}
.ptr-spinner { animation: ptr-spin 1.2s linear infinite; }
";

#[derive(Debug, Default)]
pub struct MountCounter {
    live: usize,
}

impl MountCounter {
    /// Returns true for the first live mount.
    pub fn acquire(&mut self) -> bool {
        self.live += 1;
        self.live == 1
    }

    /// Returns true when the last live mount goes away.
    pub fn release(&mut self) -> bool {
        if self.live == 0 {
            return false;
        }
        self.live -= 1;
        self.live == 0
    }
}

thread_local! {
    static MOUNTS: RefCell<MountCounter> = RefCell::new(MountCounter::default());
}

#[derive(Debug)]
pub struct StyleGuard(());

impl StyleGuard {
    pub fn acquire() -> Self {
        if MOUNTS.with(|m| m.borrow_mut().acquire()) {
            install();
        }
        StyleGuard(())
    }
}

impl Drop for StyleGuard {
    fn drop(&mut self) {
        if MOUNTS.with(|m| m.borrow_mut().release()) {
            uninstall();
        }
    }
}

fn install() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(STYLE_ID).is_some() {
        return;
    }
    if let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) {
        style.set_id(STYLE_ID);
        style.set_text_content(Some(SPINNER_CSS));
        let _ = head.append_child(&style);
    }
}

fn uninstall() {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(STYLE_ID))
    {
        el.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_mount_installs() {
        let mut c = MountCounter::default();
        assert!(c.acquire());
        assert!(!c.acquire());
        assert!(!c.acquire());
        assert!(!c.release());
        assert!(!c.release());
        assert!(c.release());
    }

    #[test]
    fn only_last_unmount_removes() {
        let mut c = MountCounter::default();
        c.acquire();
        c.acquire();
        assert!(!c.release());
        assert!(c.release());
        assert!(!c.release());
    }

    #[test]
    fn remount_after_teardown_installs_again() {
        let mut c = MountCounter::default();
        c.acquire();
        c.release();
        assert!(c.acquire());
    }

    #[test]
    fn unbalanced_release_is_harmless() {
        let mut c = MountCounter::default();
        assert!(!c.release());
        assert!(c.acquire());
    }

    #[test]
    fn css_defines_spinner_class() {
        assert!(SPINNER_CSS.contains("@keyframes ptr-spin"));
        assert!(SPINNER_CSS.contains(&format!(".{SPINNER_CLASS}")));
        assert!(SPINNER_CSS.contains("1.2s linear infinite"));
    }
}

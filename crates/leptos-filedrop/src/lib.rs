//! Leptos FileDrop Utilities
//!
//! HTML5 drag-and-drop of files onto a drop area for Leptos.
//! Tracks enter/leave depth so nested children don't flicker the highlight.

use leptos::prelude::*;
use web_sys::{DragEvent, File, FileList};

/// File drop state signals
#[derive(Clone, Copy)]
pub struct FileDropSignals {
    /// True while files are dragged over the drop area
    pub drag_active_read: ReadSignal<bool>,
    pub drag_active_write: WriteSignal<bool>,
    /// Nesting depth of dragenter/dragleave pairs
    pub depth_read: ReadSignal<i32>,
    pub depth_write: WriteSignal<i32>,
    /// When false, drops are ignored (e.g. upload limit reached)
    pub enabled: Signal<bool>,
}

pub fn create_filedrop_signals(enabled: Signal<bool>) -> FileDropSignals {
    let (drag_active_read, drag_active_write) = signal(false);
    let (depth_read, depth_write) = signal(0i32);
    FileDropSignals {
        drag_active_read,
        drag_active_write,
        depth_read,
        depth_write,
        enabled,
    }
}

/// Reset highlight state
pub fn end_drag(drop: &FileDropSignals) {
    drop.depth_write.set(0);
    drop.drag_active_write.set(false);
}

/// Check a MIME type against an `accept` pattern like `image/*` or `image/png`
pub fn accepts_mime(mime: &str, accept: &str) -> bool {
    let mime = mime.trim().to_ascii_lowercase();
    accept
        .split(',')
        .map(|pattern| pattern.trim().to_ascii_lowercase())
        .filter(|pattern| !pattern.is_empty())
        .any(|pattern| {
            if pattern == "*/*" || pattern == "*" {
                true
            } else if let Some(prefix) = pattern.strip_suffix("/*") {
                mime.split('/').next() == Some(prefix) && mime.contains('/')
            } else {
                mime == pattern
            }
        })
}

/// Collect files from a FileList, keeping only those matching `accept`
pub fn files_from_list(list: &FileList, accept: &str) -> Vec<File> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter(|file| accepts_mime(&file.type_(), accept))
        .collect()
}

/// Create dragenter handler: highlights the drop area
pub fn make_on_dragenter(drop: FileDropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if !drop.enabled.get_untracked() {
            return;
        }
        drop.depth_write.update(|d| *d += 1);
        drop.drag_active_write.set(true);
    }
}

/// Create dragover handler: required so the browser allows dropping
pub fn make_on_dragover(drop: FileDropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if drop.enabled.get_untracked() && !drop.drag_active_read.get_untracked() {
            drop.drag_active_write.set(true);
        }
    }
}

/// Create dragleave handler: clears highlight once the pointer leaves the outermost element
pub fn make_on_dragleave(drop: FileDropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let depth = drop.depth_read.get_untracked() - 1;
        if depth <= 0 {
            end_drag(&drop);
        } else {
            drop.depth_write.set(depth);
        }
    }
}

/// Create drop handler: hands accepted files to `on_files`
pub fn make_on_drop(
    drop: FileDropSignals,
    accept: &'static str,
    on_files: Callback<Vec<File>>,
) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        end_drag(&drop);
        if !drop.enabled.get_untracked() {
            return;
        }
        let files = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| files_from_list(&list, accept))
            .unwrap_or_default();
        if !files.is_empty() {
            on_files.run(files);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_wildcard_subtype() {
        assert!(accepts_mime("image/png", "image/*"));
        assert!(accepts_mime("IMAGE/JPEG", "image/*"));
        assert!(!accepts_mime("application/pdf", "image/*"));
        assert!(!accepts_mime("image", "image/*"));
    }

    #[test]
    fn test_accepts_list_and_exact() {
        assert!(accepts_mime("image/gif", "image/png, image/gif"));
        assert!(!accepts_mime("image/webp", "image/png, image/gif"));
        assert!(accepts_mime("text/plain", "*/*"));
        assert!(!accepts_mime("image/png", ""));
    }
}

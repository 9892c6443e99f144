//! Image Gallery Component

use leptos::prelude::*;

/// Index after stepping `delta` through `len` images, wrapping at both ends
fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).rem_euclid(len as isize) as usize
}

/// Main photo with prev/next, counter and thumbnails; `images` are resolved URLs
#[component]
pub fn ImageGallery(images: Vec<String>, #[prop(into)] alt: String) -> impl IntoView {
    let (selected, set_selected) = signal(0usize);

    if images.is_empty() {
        return view! { <div class="gallery-empty image-placeholder">"No images available"</div> }.into_any();
    }

    let count = images.len();
    let images = StoredValue::new(images);
    let main_alt = alt.clone();

    view! {
        <div class="gallery">
            <div class="gallery-main">
                <img
                    src=move || images.with_value(|imgs| imgs.get(selected.get()).cloned().unwrap_or_default())
                    alt=main_alt
                />
                {(count > 1).then(|| view! {
                    <button
                        type="button"
                        class="gallery-nav prev"
                        aria-label="Previous image"
                        on:click=move |_| set_selected.update(|i| *i = step(*i, -1, count))
                    >
                        "‹"
                    </button>
                    <button
                        type="button"
                        class="gallery-nav next"
                        aria-label="Next image"
                        on:click=move |_| set_selected.update(|i| *i = step(*i, 1, count))
                    >
                        "›"
                    </button>
                    <span class="gallery-counter">{move || format!("{} / {}", selected.get() + 1, count)}</span>
                })}
            </div>
            {(count > 1).then(|| view! {
                <div class="gallery-thumbs">
                    {images.get_value().into_iter().enumerate().map(|(i, src)| {
                        let label = format!("{} {}", alt, i + 1);
                        view! {
                            <button
                                type="button"
                                class=move || if selected.get() == i { "gallery-thumb active" } else { "gallery-thumb" }
                                on:click=move |_| set_selected.set(i)
                            >
                                <img src=src alt=label />
                            </button>
                        }
                    }).collect_view()}
                </div>
            })}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::step;

    #[test]
    fn test_step_wraps_around() {
        assert_eq!(step(0, 1, 3), 1);
        assert_eq!(step(2, 1, 3), 0);
        assert_eq!(step(0, -1, 3), 2);
        assert_eq!(step(0, 1, 0), 0);
    }
}

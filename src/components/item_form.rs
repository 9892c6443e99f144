//! Item Form Component
//!
//! Create and edit form for items, including photo staging and upload.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use super::category_selector::CategorySelector;
use super::image_drop_zone::ImageDropZone;
use super::status::ErrorBanner;
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::models::{Item, CATEGORIES};
use crate::router::Route;
use crate::staging::{ImageStaging, StagedImage};
use crate::validation::ItemDraft;

/// Read a picked file into memory and give it a preview URL
async fn stage_file(file: File) -> Result<StagedImage, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::Validation(format!("Could not read {}: {:?}", file.name(), e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let preview_url = web_sys::Url::create_object_url_with_blob(&file).unwrap_or_default();
    Ok(StagedImage { name: file.name(), mime: file.type_(), bytes, preview_url })
}

/// Kept photos followed by the uploaded ones; `None` once the form is gone
fn final_image_urls(staging: RwSignal<ImageStaging>, uploaded: Vec<String>) -> Option<Vec<String>> {
    staging.try_with_untracked(|s| s.merged_urls(uploaded))
}

fn revoke_previews(images: &[StagedImage]) {
    for image in images.iter().filter(|img| !img.preview_url.is_empty()) {
        let _ = web_sys::Url::revoke_object_url(&image.preview_url);
    }
}

/// Item form; `item` pre-fills it for editing.
///
/// After saving, `on_saved` receives the item and the form resets; without
/// it the app moves on to the item's page.
#[component]
pub fn ItemForm(
    #[prop(optional)] item: Option<Item>,
    #[prop(optional, into)] on_saved: Option<Callback<Item>>,
    /// Smaller layout for the home page sidebar
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let max_images = ctx.config().max_images;
    let editing_id = item.as_ref().map(|i| i.id);

    let draft = item.as_ref().map(ItemDraft::from_item).unwrap_or_else(ItemDraft::new);
    let (name, set_name) = signal(draft.name);
    let (description, set_description) = signal(draft.description);
    let (category, set_category) = signal(draft.category);
    let (location, set_location) = signal(draft.location);
    let (reserved, set_reserved) = signal(draft.reserved);

    let staging = RwSignal::new(match &item {
        Some(item) => ImageStaging::with_existing(item.image_urls.clone(), max_images),
        None => ImageStaging::new(max_images),
    });
    let (error, set_error) = signal::<Option<String>>(None);
    let (image_error, set_image_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    on_cleanup(move || {
        if let Some(staged) = staging.try_with_untracked(|s| s.staged().to_vec()) {
            revoke_previews(&staged);
        }
    });

    let on_files = Callback::new(move |files: Vec<File>| {
        set_image_error.set(None);
        if !staging.with_untracked(|s| s.can_accept(files.len())) {
            set_image_error.set(Some(staging.with_untracked(ImageStaging::limit_message)));
            return;
        }
        spawn_local(async move {
            let mut read = Vec::with_capacity(files.len());
            for file in files {
                match stage_file(file).await {
                    Ok(image) => read.push(image),
                    Err(e) => log::warn!("{}", e),
                }
            }
            let previews = read.clone();
            match staging.try_update(|s| s.stage(read)) {
                Some(Ok(added)) => log::debug!("staged {} image(s)", added),
                Some(Err(msg)) => {
                    revoke_previews(&previews);
                    set_image_error.set(Some(msg));
                }
                None => revoke_previews(&previews),
            }
        });
    });

    let remove_staged = move |index: usize| {
        let mut removed = None;
        staging.update(|s| removed = s.remove_staged(index));
        if let Some(image) = removed {
            revoke_previews(std::slice::from_ref(&image));
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = ItemDraft {
            name: name.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked(),
            location: location.get_untracked(),
            reserved: reserved.get_untracked(),
        };
        if let Err(msg) = draft.validate() {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);

        let api = ctx.api();
        let staged = staging.with_untracked(|s| s.staged().to_vec());
        spawn_local(async move {
            let uploaded = if staged.is_empty() {
                Ok(Vec::new())
            } else {
                api.upload_images(&staged).await
            };
            let result = match uploaded {
                Ok(urls) => {
                    let Some(image_urls) = final_image_urls(staging, urls) else {
                        log::debug!("item form closed during upload; not saving");
                        return;
                    };
                    let request = draft.into_request(image_urls);
                    match editing_id {
                        Some(id) => api.update_item(id, &request).await,
                        None => api.create_item(&request).await,
                    }
                }
                Err(e) => Err(e),
            };
            match result {
                Ok(saved) => {
                    let done = staging.try_update(|s| s.take_staged()).unwrap_or_default();
                    revoke_previews(&done);
                    match on_saved {
                        Some(cb) => {
                            if editing_id.is_none() {
                                let blank = ItemDraft::new();
                                set_name.set(blank.name);
                                set_description.set(blank.description);
                                set_category.set(blank.category);
                                set_location.set(blank.location);
                                staging.set(ImageStaging::new(max_images));
                            }
                            set_submitting.set(false);
                            cb.run(saved);
                        }
                        None => ctx.navigate(Route::ItemDetail(saved.id)),
                    }
                }
                Err(e) => {
                    log::error!("saving item failed: {}", e);
                    set_error.set(Some(ctx.error_message(&e, "Failed to save item. Please try again.")));
                    set_submitting.set(false);
                }
            }
        });
    };

    let on_cancel = move |_: web_sys::MouseEvent| match editing_id {
        Some(id) => ctx.navigate(Route::ItemDetail(id)),
        None => ctx.navigate(Route::MyItems),
    };

    view! {
        <form class=if compact { "item-form compact" } else { "item-form" } on:submit=on_submit>
            <ErrorBanner message=error />

            <label class="form-field">
                <span>"Name *"</span>
                <input
                    type="text"
                    placeholder="What are you giving away?"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>

            <label class="form-field">
                <span>"Description *"</span>
                <textarea
                    rows="5"
                    placeholder="Condition, size, pickup details..."
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </label>

            <div class="form-field">
                <span>"Category *"</span>
                <CategorySelector
                    current=category
                    options=CATEGORIES
                    on_change=Callback::new(move |c: String| set_category.set(c))
                />
            </div>

            <label class="form-field">
                <span>"Location"</span>
                <input
                    type="text"
                    placeholder="e.g. Wien, 1070"
                    prop:value=move || location.get()
                    on:input=move |ev| set_location.set(event_target_value(&ev))
                />
            </label>

            <Show when=move || editing_id.is_some()>
                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || reserved.get()
                        on:change=move |ev| set_reserved.set(event_target_checked(&ev))
                    />
                    <span>"Reserved"</span>
                </label>
            </Show>

            <div class="form-field">
                <span>"Images"</span>
                <ImageDropZone
                    count=Signal::derive(move || staging.with(ImageStaging::total))
                    max=staging.with_untracked(ImageStaging::max)
                    on_files=on_files
                />
                <ErrorBanner message=image_error />

                <div class="image-previews">
                    {move || staging.with(|s| s.existing().to_vec()).into_iter().enumerate().map(|(i, url)| {
                        view! {
                            <div class="image-preview">
                                <img src=ctx.asset_url(&url) alt="" />
                                <button
                                    type="button"
                                    class="image-remove"
                                    title="Remove image"
                                    on:click=move |_| staging.update(|s| { s.remove_existing(i); })
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }).collect_view()}
                    {move || staging.with(|s| s.staged().iter().map(|img| img.preview_url.clone()).collect::<Vec<_>>())
                        .into_iter()
                        .enumerate()
                        .map(|(i, preview)| {
                            view! {
                                <div class="image-preview staged">
                                    <img src=preview alt="" />
                                    <button
                                        type="button"
                                        class="image-remove"
                                        title="Remove image"
                                        on:click=move |_| remove_staged(i)
                                    >
                                        "×"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="form-actions">
                {(!compact).then(|| view! {
                    <button type="button" class="btn btn-ghost" on:click=on_cancel>"Cancel"</button>
                })}
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || match (submitting.get(), editing_id.is_some()) {
                        (true, _) => "Saving...",
                        (false, true) => "Save Changes",
                        (false, false) => "Give Away",
                    }}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_urls_keep_existing_first() {
        let owner = Owner::new();
        let staging = owner.with(|| RwSignal::new(ImageStaging::with_existing(vec!["/a.jpg".into()], 5)));
        assert_eq!(
            final_image_urls(staging, vec!["/b.jpg".into()]),
            Some(vec!["/a.jpg".to_string(), "/b.jpg".to_string()])
        );
    }

    #[test]
    fn test_final_urls_after_form_is_gone() {
        let owner = Owner::new();
        let staging = owner.with(|| RwSignal::new(ImageStaging::new(5)));
        owner.cleanup();
        assert_eq!(final_image_urls(staging, vec!["/b.jpg".into()]), None);
    }
}

//! Comment Section Component
//!
//! Comments of one item plus the form to add a new one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::link::Link;
use super::status::ErrorBanner;
use crate::context::use_app_context;
use crate::format::{avatar_url, format_date_time};
use crate::models::Comment;
use crate::validation::validate_comment;

#[component]
pub fn CommentSection(item_id: u64) -> impl IntoView {
    let ctx = use_app_context();

    let (comments, set_comments) = signal(Vec::<Comment>::new());
    let (loading, set_loading) = signal(true);
    let (text, set_text) = signal(String::new());
    let (posting, set_posting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let api = ctx.api();
    spawn_local(async move {
        match api.list_comments(item_id).await {
            Ok(list) => set_comments.set(list),
            Err(e) => {
                log::error!("loading comments for #{} failed: {}", item_id, e);
                set_error.set(Some(ctx.error_message(&e, "Failed to load comments.")));
            }
        }
        set_loading.set(false);
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(body) = validate_comment(&text.get_untracked()) else {
            return;
        };
        if posting.get_untracked() {
            return;
        }
        set_posting.set(true);
        set_error.set(None);
        let api = ctx.api();
        spawn_local(async move {
            match api.add_comment(item_id, &body).await {
                Ok(comment) => {
                    set_comments.update(|list| list.insert(0, comment));
                    set_text.set(String::new());
                }
                Err(e) => {
                    log::error!("posting comment failed: {}", e);
                    set_error.set(Some(ctx.error_message(&e, "Failed to post comment. Please try again.")));
                }
            }
            set_posting.set(false);
        });
    };

    view! {
        <section class="comments">
            <h2 class="section-title">
                "Comments " <span class="count">{move || format!("({})", comments.with(Vec::len))}</span>
            </h2>

            <ErrorBanner message=error />

            {move || {
                if loading.get() {
                    return view! { <p class="muted">"Loading comments..."</p> }.into_any();
                }
                let list = comments.get();
                if list.is_empty() {
                    return view! { <p class="muted">"No comments yet. Be the first to ask a question!"</p> }.into_any();
                }
                view! {
                    <ul class="comment-list">
                        {list.into_iter().map(|comment| {
                            let author = comment.author_name().to_string();
                            view! {
                                <li class="comment">
                                    <img class="avatar avatar-sm" src=avatar_url(&author) alt="" />
                                    <div class="comment-body">
                                        <div class="comment-header">
                                            <strong>{author}</strong>
                                            <span class="muted">{format_date_time(comment.created_at.as_deref())}</span>
                                        </div>
                                        <p>{comment.text}</p>
                                    </div>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}

            <Show
                when=move || ctx.is_logged_in()
                fallback=|| view! {
                    <p class="muted">
                        <Link href="/login">"Log in"</Link>
                        " to leave a comment."
                    </p>
                }
            >
                <form class="comment-form" on:submit=on_submit>
                    <textarea
                        rows="3"
                        placeholder="Write a comment..."
                        prop:value=move || text.get()
                        on:input=move |ev| set_text.set(event_target_value(&ev))
                    ></textarea>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || posting.get() || validate_comment(&text.get()).is_none()
                    >
                        {move || if posting.get() { "Posting..." } else { "Post Comment" }}
                    </button>
                </form>
            </Show>
        </section>
    }
}

use api::{BlogForm, BlogPost};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorBanner, Label, TextField, Textarea};
use ui::dialogs::report_error;
use ui::{read_first_upload, use_api, use_session_api};

use crate::Route;

/// Editable copy of a stored post. No new image is picked yet.
fn draft_from(post: &BlogPost) -> BlogForm {
    BlogForm {
        title: post.title.clone(),
        summary: post.summary.clone(),
        image: None,
    }
}

/// Edit an existing post. The current image stays unless a new one is picked.
#[component]
pub fn EditBlog(id: String) -> Element {
    let api = use_api();
    let session_api = use_session_api();
    let nav = use_navigator();
    let mut form = use_signal(BlogForm::default);
    let mut current_image = use_signal(String::new);
    let mut loaded = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let post_id = id.clone();
    let _post = use_resource(use_reactive!(|(id,)| {
        let api = session_api();
        async move {
            match api.get_blog(&id).await {
                Ok(post) => {
                    form.set(draft_from(&post));
                    current_image.set(post.image);
                    loaded.set(true);
                }
                Err(e) => {
                    report_error("Failed to load blog post", &e);
                    error.set(Some(e.to_string()));
                }
            }
        }
    }));

    let save_api = api.clone();
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = form();
        let api = save_api.clone();
        let id = post_id.clone();
        spawn(async move {
            saving.set(true);
            match api.update_blog(&id, &draft).await {
                Ok(()) => {
                    tracing::info!(%id, "blog post updated");
                    nav.push(Route::Blog {});
                }
                Err(e) => {
                    report_error("Failed to update blog post", &e);
                    error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    let f = form();
    let image_url = api.asset_url(&current_image());

    rsx! {
        div { class: "page",
            Link { to: Route::Blog {}, "← Back to blog" }
            h1 { class: "page-title", "Edit Post" }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            if !loaded() && error().is_none() {
                p { class: "muted", "Loading post..." }
            }

            if loaded() {
                form { class: "form card section", onsubmit: submit,
                    TextField {
                        label: "Title",
                        id: "edit-blog-title",
                        value: f.title.clone(),
                        required: true,
                        oninput: move |v: String| form.write().title = v,
                    }
                    div { class: "form-field",
                        Label { html_for: "edit-blog-summary", "Summary" }
                        Textarea {
                            id: "edit-blog-summary",
                            value: f.summary.clone(),
                            rows: 6,
                            oninput: move |evt: FormEvent| form.write().summary = evt.value(),
                        }
                    }
                    if !image_url.is_empty() && f.image.is_none() {
                        img { class: "preview", src: "{image_url}", alt: "Current image" }
                    }
                    div { class: "form-field",
                        Label { html_for: "edit-blog-image", "Replace Image" }
                        input {
                            id: "edit-blog-image",
                            r#type: "file",
                            accept: "image/*",
                            onchange: move |evt: FormEvent| async move {
                                let upload = read_first_upload(&evt).await;
                                form.write().image = upload;
                            },
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        kind: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Update Post" }
                    }
                }
            }
        }
    }
}

use api::dates::format_long;
use api::{BlogForm, BlogPost};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorBanner, Label, TextField, Textarea};
use ui::dialogs::report_error;
use ui::icons::{FaPenToSquare, FaPlus, FaXmark};
use ui::{read_first_upload, use_api, use_auth, use_session_api, Icon};

use crate::Route;

/// Blog index with a "Create New Post" form for signed-in users.
#[component]
pub fn Blog() -> Element {
    let api = use_api();
    let session_api = use_session_api();
    let auth = use_auth();
    let mut posts = use_signal(Vec::<BlogPost>::new);
    let mut show_form = use_signal(|| false);

    let _posts = use_resource(move || {
        let api = session_api();
        async move {
            match api.list_blogs().await {
                Ok(list) => posts.set(list),
                Err(e) => report_error("Failed to load blog posts", &e),
            }
        }
    });

    let logged_in = auth().is_logged_in();

    rsx! {
        div { class: "page",
            div { class: "toolbar",
                h1 { class: "page-title", "Blog" }
                if logged_in {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| show_form.toggle(),
                        if show_form() {
                            Icon { width: 12, height: 12, icon: FaXmark }
                            "Close"
                        } else {
                            Icon { width: 12, height: 12, icon: FaPlus }
                            "Create New Post"
                        }
                    }
                }
            }

            if logged_in && show_form() {
                NewPostForm {
                    on_created: move |post: BlogPost| {
                        posts.write().push(post);
                        show_form.set(false);
                    },
                }
            }

            if posts().is_empty() {
                p { class: "muted", "No posts yet." }
            }

            for post in posts() {
                article { key: "{post.id}", class: "card blog-post",
                    if !post.image.is_empty() {
                        img { src: api.asset_url(&post.image), alt: "{post.title}" }
                    }
                    div {
                        h2 { "{post.title}" }
                        p { class: "muted", "By {post.author_name()} · {format_long(&post.created_at)}" }
                        p { "{post.summary}" }
                        if !post.comments.is_empty() {
                            p { class: "muted", "{post.comments.len()} comments" }
                        }
                        if logged_in {
                            Link {
                                class: "btn btn-ghost",
                                to: Route::EditBlog { id: post.id.clone() },
                                Icon { width: 12, height: 12, icon: FaPenToSquare }
                                " Edit"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NewPostForm(on_created: EventHandler<BlogPost>) -> Element {
    let api = use_api();
    let mut form = use_signal(BlogForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = form();
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            match api.create_blog(&draft).await {
                Ok(post) => {
                    tracing::info!(id = %post.id, "blog post created");
                    form.set(BlogForm::default());
                    error.set(None);
                    on_created.call(post);
                }
                Err(e) => {
                    report_error("Failed to create blog post", &e);
                    error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    let f = form();

    rsx! {
        form { class: "form card section", onsubmit: submit,
            h2 { "Create New Post" }
            if let Some(message) = error() {
                ErrorBanner { message }
            }
            TextField {
                label: "Title",
                id: "blog-title",
                value: f.title.clone(),
                required: true,
                oninput: move |v: String| form.write().title = v,
            }
            div { class: "form-field",
                Label { html_for: "blog-summary", "Summary" }
                Textarea {
                    id: "blog-summary",
                    value: f.summary.clone(),
                    rows: 6,
                    oninput: move |evt: FormEvent| form.write().summary = evt.value(),
                }
            }
            div { class: "form-field",
                Label { html_for: "blog-image", "Image" }
                input {
                    id: "blog-image",
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
                if saving() { "Publishing..." } else { "Publish" }
            }
        }
    }
}

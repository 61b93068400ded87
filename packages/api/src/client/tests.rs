use std::sync::{Arc, Mutex};

use axum::extract::{Json, Multipart, Path, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::Router;
use serde_json::{json, Value};

use super::*;
use crate::forms::Upload;
use crate::models::{FertilizationSchedule, PlantRef};

/// Requests seen by the mock backend.
#[derive(Clone, Default)]
struct Backend {
    auth_headers: Arc<Mutex<Vec<Option<String>>>>,
    parts: Arc<Mutex<Vec<(String, String)>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl Backend {
    fn record_auth(&self, headers: &HeaderMap) {
        let value = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.auth_headers.lock().unwrap().push(value);
    }

    fn record_body(&self, body: Value) {
        self.bodies.lock().unwrap().push(body);
    }

    /// Text parts keep their value; file parts record `file:<name>`.
    async fn record_parts(&self, mut multipart: Multipart) -> Vec<(String, String)> {
        let mut seen = Vec::new();
        while let Some(field) = multipart.next_field().await.unwrap() {
            let key = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);
            let bytes = field.bytes().await.unwrap();
            let value = match file_name {
                Some(name) => format!("file:{name}"),
                None => String::from_utf8_lossy(&bytes).into_owned(),
            };
            seen.push((key, value));
        }
        self.parts.lock().unwrap().extend(seen.clone());
        seen
    }

    fn last_auth(&self) -> Option<String> {
        self.auth_headers.lock().unwrap().last().cloned().flatten()
    }

    fn parts_named(&self, key: &str) -> Vec<String> {
        self.parts
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

fn part<'a>(parts: &'a [(String, String)], key: &str) -> &'a str {
    parts
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or_default()
}

fn tomato() -> Value {
    json!({
        "_id": "p1",
        "generalInfo": { "plantName": "Tomato", "category": "Fruit" },
        "quickInfo": { "maturityTime": { "duration": "10", "unit": "weeks" } },
        "plantingTimes": { "springTransplant": "2024-04-20T00:00:00.000Z" }
    })
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["password"] == "secret" {
        (
            StatusCode::OK,
            Json(json!({ "data": { "token": "tok-123", "message": "Login successful", "role": "admin" } })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid email or password" })),
        )
    }
}

async fn register(State(backend): State<Backend>, Json(body): Json<Value>) -> impl IntoResponse {
    backend.record_body(body);
    (StatusCode::CREATED, Json(json!({ "message": "User registered successfully" })))
}

async fn list_plants(State(backend): State<Backend>, headers: HeaderMap) -> Json<Value> {
    backend.record_auth(&headers);
    Json(json!([
        tomato(),
        {
            "_id": "p2",
            "generalInfo": { "plantName": "Kale", "img": null },
            "plantingTimes": { "springTransplant": "2024-04-20", "fallSowOutdoors": null }
        }
    ]))
}

async fn get_plant(Path(id): Path<String>) -> impl IntoResponse {
    if id == "p1" {
        (StatusCode::OK, Json(tomato()))
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "message": "Plant not found" })))
    }
}

async fn create_plant(State(backend): State<Backend>, multipart: Multipart) -> Json<Value> {
    let parts = backend.record_parts(multipart).await;
    Json(json!({
        "_id": "new-plant",
        "generalInfo": { "plantName": part(&parts, "generalInfo[plantName]") }
    }))
}

async fn search_plants(Json(body): Json<Value>) -> Json<Value> {
    if body["category"] == "Fruit" {
        Json(json!([tomato()]))
    } else {
        Json(json!([]))
    }
}

async fn list_trefle() -> Json<Value> {
    Json(json!([{ "id": 7, "common_name": "Evergreen oak", "scientific_name": "Quercus ilex" }]))
}

async fn list_gardens(State(backend): State<Backend>, headers: HeaderMap) -> Json<Value> {
    backend.record_auth(&headers);
    Json(json!([
        { "_id": "g1", "name": "Backyard", "plants": ["p1"], "last_watered": "2024-05-01" },
        { "_id": "g2", "name": "Patio", "plants": [], "last_watered": "2024-05-03", "growth_notes": null }
    ]))
}

async fn create_garden(
    State(backend): State<Backend>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Json<Value> {
    backend.record_auth(&headers);
    let parts = backend.record_parts(multipart).await;
    let plants: Vec<&str> = parts
        .iter()
        .filter(|(k, _)| k == "plants")
        .map(|(_, v)| v.as_str())
        .collect();
    Json(json!({ "garden": {
        "_id": "g2",
        "name": part(&parts, "name"),
        "plants": plants,
        "last_watered": part(&parts, "last_watered"),
        "fertilized_schedule": part(&parts, "fertilized_schedule"),
    }}))
}

async fn garden_detail(Path(id): Path<String>) -> Json<Value> {
    Json(json!({
        "_id": id,
        "name": "Balcony",
        "plants": [{ "_id": "p1", "generalInfo": { "plantName": "Tomato" } }],
        "fertilized_schedule": "Monthly"
    }))
}

async fn update_garden(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Json<Value> {
    backend.record_body(body.clone());
    let mut garden = body;
    garden["_id"] = json!(id);
    Json(json!({ "garden": garden }))
}

async fn delete_garden(State(backend): State<Backend>, headers: HeaderMap) -> Json<Value> {
    backend.record_auth(&headers);
    Json(json!({ "message": "Garden deleted" }))
}

async fn list_blogs() -> Json<Value> {
    Json(json!([
        { "_id": "b1", "title": "Compost", "summary": "Start a pile", "imageUrl": "/uploads/pile.jpg",
          "user": { "_id": "u1", "name": "Ada", "email": "ada@example.com" } },
        { "_id": "b2", "title": "Mulch", "summary": "Keep it moist", "user": "u2" }
    ]))
}

async fn get_blog(Path(id): Path<String>) -> Json<Value> {
    Json(json!({ "_id": id, "title": "Compost", "summary": "Start a pile" }))
}

async fn create_blog(State(backend): State<Backend>, multipart: Multipart) -> Json<Value> {
    let parts = backend.record_parts(multipart).await;
    Json(json!({
        "_id": "b3",
        "title": part(&parts, "title"),
        "summary": part(&parts, "summary"),
        "image": "/uploads/new.jpg"
    }))
}

async fn update_blog(State(backend): State<Backend>, multipart: Multipart) -> impl IntoResponse {
    let parts = backend.record_parts(multipart).await;
    if part(&parts, "title") == "Forbidden" {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "message": "You can only edit your own posts" })),
        );
    }
    (StatusCode::OK, Json(json!({ "message": "Blog updated" })))
}

async fn list_reviews() -> Json<Value> {
    Json(json!({ "review": [
        { "_id": "r1", "review": "Great tips", "user": { "name": "Sam" } },
        { "_id": "r2", "review": "Helpful" }
    ]}))
}

async fn create_review(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    backend.record_auth(&headers);
    Json(json!({ "review": { "_id": "r3", "review": body["review"] } }))
}

async fn broken() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

async fn spawn_backend() -> (ApiClient, Backend) {
    let backend = Backend::default();
    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/api/plants/list", get(list_plants))
        .route("/api/plants/search", post(search_plants))
        .route("/api/plants/{id}", get(get_plant))
        .route("/api/plants", post(create_plant))
        .route("/api/trefle/list", get(list_trefle))
        .route("/api/garden/list", get(list_gardens))
        .route("/api/garden", post(create_garden))
        .route(
            "/api/garden/{id}",
            get(garden_detail).put(update_garden).delete(delete_garden),
        )
        .route("/api/blogs/list", get(list_blogs))
        .route("/api/blogs/{id}", get(get_blog).put(update_blog))
        .route("/api/blogs", post(create_blog))
        .route("/api/reviews/list", get(list_reviews))
        .route("/api/reviews", post(create_review))
        .route("/api/broken", put(broken))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = GreenGuideConfig::new(format!("http://{addr}/"));
    (ApiClient::new(&config).unwrap(), backend)
}

#[test]
fn test_rejects_base_url_without_scheme() {
    let config = GreenGuideConfig::new("localhost:5000");
    assert!(matches!(ApiClient::new(&config), Err(ApiError::InvalidUrl(_))));
}

#[test]
fn test_trailing_slash_and_asset_urls() {
    let client = ApiClient::new(&GreenGuideConfig::new("http://localhost:5000/")).unwrap();
    assert_eq!(client.base_url(), "http://localhost:5000");
    assert_eq!(
        client.asset_url("/uploads/a.jpg"),
        "http://localhost:5000/uploads/a.jpg"
    );
    assert_eq!(client.asset_url("https://cdn.test/x.png"), "https://cdn.test/x.png");
    assert_eq!(client.asset_url(""), "");
}

#[test]
fn test_empty_token_is_dropped() {
    let client = ApiClient::new(&GreenGuideConfig::default()).unwrap();
    assert_eq!(client.clone().with_token(Some(String::new())).token(), None);
    assert_eq!(client.with_token(Some("t".into())).token(), Some("t"));
}

#[tokio::test]
async fn test_login_returns_token_and_role() {
    let (client, _) = spawn_backend().await;

    let data = client.login("ada@example.com", "secret").await.unwrap();
    assert_eq!(data.token, "tok-123");
    assert_eq!(data.role.as_deref(), Some("admin"));
}

#[tokio::test]
async fn test_login_failure_carries_backend_message() {
    let (client, _) = spawn_backend().await;

    let err = client.login("ada@example.com", "wrong").await.unwrap_err();
    assert!(matches!(err, ApiError::Backend { status: 401, .. }));
    assert_eq!(err.to_string(), "Invalid email or password");
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_register_posts_all_fields() {
    let (client, backend) = spawn_backend().await;

    let message = client
        .register("Ada", "ada@example.com", "secret")
        .await
        .unwrap();
    assert_eq!(message, "User registered successfully");
    let body = backend.bodies.lock().unwrap()[0].clone();
    assert_eq!(body, json!({ "name": "Ada", "email": "ada@example.com", "password": "secret" }));
}

#[tokio::test]
async fn test_bearer_header_follows_token() {
    let (client, backend) = spawn_backend().await;

    client.list_plants().await.unwrap();
    assert_eq!(backend.last_auth(), None);

    let authed = client.with_token(Some("tok-123".into()));
    authed.list_gardens().await.unwrap();
    assert_eq!(backend.last_auth().as_deref(), Some("Bearer tok-123"));
}

#[tokio::test]
async fn test_plant_reads() {
    let (client, _) = spawn_backend().await;

    let plants = client.list_plants().await.unwrap();
    assert_eq!(plants.len(), 2);
    assert_eq!(plants[1].name(), "Kale");
    assert_eq!(plants[1].general_info.img, "");
    assert_eq!(plants[1].planting_times.fall_sow_outdoors, "");

    let plant = client.get_plant("p1").await.unwrap();
    assert_eq!(plant.quick_info.maturity_time.to_string(), "10 weeks");

    let err = client.get_plant("missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Plant not found");

    let found = client.search_plants("Fruit").await.unwrap();
    assert_eq!(found.len(), 1);
    assert!(client.search_plants("Herbs").await.unwrap().is_empty());

    let trefle = client.list_trefle().await.unwrap();
    assert_eq!(trefle[0].display_name(), "Evergreen oak");
}

#[tokio::test]
async fn test_create_plant_sends_flattened_multipart() {
    let (client, backend) = spawn_backend().await;

    let mut form = PlantForm::default();
    form.general_info.plant_name = "Pepper".into();
    form.general_info.category = "Fruit".into();
    form.quick_info.sun_requirement = "Full sun".into();
    form.quick_info.maturity_time.duration = 12.0;
    form.img = Some(Upload::new("pepper.jpg", vec![1, 2, 3]));

    let created = client.create_plant(&form).await.unwrap();
    assert_eq!(created.id, "new-plant");
    assert_eq!(created.name(), "Pepper");

    assert_eq!(backend.parts_named("quickInfo[maturityTime][duration]"), vec!["12"]);
    assert_eq!(backend.parts_named("quickInfo[slideBarOption]"), vec!["16/square"]);
    assert_eq!(backend.parts_named("img"), vec!["file:pepper.jpg"]);
    assert!(backend.parts_named("icon").is_empty());
}

#[tokio::test]
async fn test_create_plant_validates_before_sending() {
    let (client, backend) = spawn_backend().await;

    let err = client.create_plant(&PlantForm::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert!(backend.parts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_garden_crud_roundtrip() {
    let (client, backend) = spawn_backend().await;
    let client = client.with_token(Some("tok-123".into()));

    let gardens = client.list_gardens().await.unwrap();
    assert_eq!(gardens[0].plant_ids(), vec!["p1"]);
    assert_eq!(gardens[1].growth_notes, "");

    let form = GardenForm {
        name: "Herb bed".into(),
        plants: vec!["p1".into(), "p2".into()],
        last_watered: "2024-05-02".into(),
        fertilized_schedule: FertilizationSchedule::EveryTwoWeeks,
        growth_notes: String::new(),
        growth_images: vec![Upload::new("bed.jpg", vec![0])],
    };
    let created = client.create_garden(&form).await.unwrap();
    assert_eq!(created.id, "g2");
    assert_eq!(created.name, "Herb bed");
    assert_eq!(created.plant_ids(), vec!["p1", "p2"]);
    assert_eq!(created.fertilized_schedule, FertilizationSchedule::EveryTwoWeeks);
    assert_eq!(backend.parts_named("growth_images"), vec!["file:bed.jpg"]);
    assert_eq!(backend.last_auth().as_deref(), Some("Bearer tok-123"));

    let mut detail = client.get_garden("g9").await.unwrap();
    assert_eq!(detail.id, "g9");
    assert_eq!(detail.plants[0].name(), Some("Tomato"));

    detail.name = "Sunny balcony".into();
    detail.plants.push(PlantRef::Id("p2".into()));
    let updated = client
        .update_garden(&detail.id, &GardenUpdate::from(&detail))
        .await
        .unwrap();
    assert_eq!(updated.name, "Sunny balcony");
    assert_eq!(updated.plant_ids(), vec!["p1", "p2"]);
    let sent = backend.bodies.lock().unwrap().last().cloned().unwrap();
    assert_eq!(sent["plants"], json!(["p1", "p2"]));
    assert_eq!(sent["fertilized_schedule"], "Monthly");

    client.delete_garden("g9").await.unwrap();
}

#[tokio::test]
async fn test_garden_validation_skips_request() {
    let (client, backend) = spawn_backend().await;

    let err = client.create_garden(&GardenForm::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "Garden Name and Last Watered Date are required!");
    assert!(backend.auth_headers.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_blogs() {
    let (client, backend) = spawn_backend().await;

    let posts = client.list_blogs().await.unwrap();
    assert_eq!(posts[0].image, "/uploads/pile.jpg");
    assert_eq!(posts[0].author_name(), "Ada");
    assert_eq!(posts[1].author_name(), "Anonymous");

    let post = client.get_blog("b1").await.unwrap();
    assert_eq!(post.title, "Compost");

    let form = BlogForm {
        title: "Seeds".into(),
        summary: "Saving seeds".into(),
        image: Some(Upload::new("seeds.png", vec![4])),
    };
    let created = client.create_blog(&form).await.unwrap();
    assert_eq!(created.title, "Seeds");
    assert_eq!(backend.parts_named("image"), vec!["file:seeds.png"]);

    client.update_blog("b1", &form).await.unwrap();
    assert_eq!(backend.parts_named("imageUrl"), vec!["file:seeds.png"]);
}

#[tokio::test]
async fn test_blog_update_error_message() {
    let (client, _) = spawn_backend().await;

    let form = BlogForm {
        title: "Forbidden".into(),
        summary: "x".into(),
        image: None,
    };
    let err = client.update_blog("b1", &form).await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "You can only edit your own posts");
}

#[tokio::test]
async fn test_reviews() {
    let (client, backend) = spawn_backend().await;

    let reviews = client.list_reviews().await.unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].author_name(), "Sam");

    let client = client.with_token(Some("tok-123".into()));
    let created = client.create_review("Lovely site").await.unwrap();
    assert_eq!(created.id, "r3");
    assert_eq!(created.review, "Lovely site");
    assert_eq!(backend.last_auth().as_deref(), Some("Bearer tok-123"));

    assert!(matches!(
        client.create_review("  ").await,
        Err(ApiError::Validation(_))
    ));
}

#[tokio::test]
async fn test_non_json_error_body_falls_back_to_status() {
    let (client, _) = spawn_backend().await;

    let request = client.request(Method::PUT, "/api/broken");
    let err = client.execute(request).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Request failed: 500 Internal Server Error");
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let (client, _) = spawn_backend().await;

    // reviews list is an object, not an array of plants
    let result: Result<Vec<Plant>, ApiError> = client.get_json("/api/reviews/list").await;
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

//! OpenAPI documentation assembled from the `#[utoipa::path]` annotations on
//! every handler. Served interactively at `/docs`.

use utoipa::OpenApi;

use crate::api;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "campusctl",
        description = "Student, department and course-enrollment API with a scraped book-recommendation pipeline"
    ),
    paths(
        api::handlers::departements::create_departement,
        api::handlers::departements::list_departements,
        api::handlers::formations::create_formation,
        api::handlers::formations::list_formations,
        api::handlers::students::create_student,
        api::handlers::students::list_students,
        api::handlers::students::get_student,
        api::handlers::students::list_student_formations,
        api::handlers::auth::login,
        api::handlers::inscriptions::enroll,
        api::handlers::books::scrape_books,
        api::handlers::books::get_recommendations,
        api::handlers::books::get_book_summary,
    ),
    tags(
        (name = "departements", description = "Department management"),
        (name = "formations", description = "Course offerings"),
        (name = "students", description = "Student accounts"),
        (name = "authentication", description = "Password check"),
        (name = "inscriptions", description = "Enrollment links"),
        (name = "books", description = "Catalogue scraper and summarizer")
    )
)]
pub struct ApiDoc;

//! Author client (`/author/`)

use crate::{
    api::validate_payload,
    error::ApiResult,
    http::HttpClient,
    models::{
        author::{Author, AuthorCreate},
        book::Book,
    },
};

#[derive(Clone)]
pub struct AuthorsApi {
    http: HttpClient,
}

impl AuthorsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ApiResult<Vec<Author>> {
        self.http.get("/author/").await
    }

    pub async fn get(&self, author_id: i64) -> ApiResult<Author> {
        self.http.get(&format!("/author/{}", author_id)).await
    }

    pub async fn create(&self, author: &AuthorCreate) -> ApiResult<Author> {
        validate_payload(author)?;
        self.http.post("/author/", author).await
    }

    pub async fn update(&self, author_id: i64, author: &AuthorCreate) -> ApiResult<Author> {
        validate_payload(author)?;
        self.http.put(&format!("/author/{}", author_id), author).await
    }

    pub async fn delete(&self, author_id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/author/{}", author_id)).await
    }

    /// Books written by an author
    pub async fn books(&self, author_id: i64) -> ApiResult<Vec<Book>> {
        self.http.get(&format!("/author/{}/books", author_id)).await
    }
}

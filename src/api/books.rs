//! Book catalog client (`/book/`)

use crate::{
    api::validate_payload,
    error::ApiResult,
    http::HttpClient,
    models::{
        author::Author,
        book::{Book, BookCopy, BookCopyCreate, BookCreate},
    },
};

#[derive(Clone)]
pub struct BooksApi {
    http: HttpClient,
}

impl BooksApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ApiResult<Vec<Book>> {
        self.http.get("/book/").await
    }

    pub async fn get(&self, book_id: i64) -> ApiResult<Book> {
        self.http.get(&format!("/book/{}", book_id)).await
    }

    pub async fn create(&self, book: &BookCreate) -> ApiResult<Book> {
        validate_payload(book)?;
        self.http.post("/book/", book).await
    }

    pub async fn update(&self, book_id: i64, book: &BookCreate) -> ApiResult<Book> {
        validate_payload(book)?;
        self.http.put(&format!("/book/{}", book_id), book).await
    }

    /// Delete a book and all of its copies (admin only)
    pub async fn delete(&self, book_id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/book/{}", book_id)).await
    }

    pub async fn add_copy(&self, book_id: i64, copy: &BookCopyCreate) -> ApiResult<BookCopy> {
        self.http.post(&format!("/book/{}/copy", book_id), copy).await
    }

    pub async fn copies(&self, book_id: i64) -> ApiResult<Vec<BookCopy>> {
        self.http.get(&format!("/book/{}/copies", book_id)).await
    }

    pub async fn delete_copy(&self, book_id: i64, copy_id: i64) -> ApiResult<()> {
        self.http
            .delete(&format!("/book/{}/copy/{}", book_id, copy_id))
            .await
    }

    /// Link an existing author to a book
    pub async fn add_author(&self, book_id: i64, author_id: i64) -> ApiResult<serde_json::Value> {
        self.http
            .post_empty(&format!("/book/{}/authors?author_id={}", book_id, author_id))
            .await
    }

    pub async fn authors(&self, book_id: i64) -> ApiResult<Vec<Author>> {
        self.http.get(&format!("/book/{}/authors", book_id)).await
    }
}

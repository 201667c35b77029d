use anyhow::{bail, Result};
use chrono::Utc;
use serde::Serialize;

use hzs_library_client::{
    models::{
        book::{BookCopyCreate, CopyStatus},
        invoice::{PaymentCreate, PaymentMethod},
    },
    routes::Navigation,
    LibraryClient,
};

use crate::cli::OutputFormat;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

// ── Session ─────────────────────────────────────────────────────────────

pub async fn cmd_login(client: &LibraryClient, email: &str, password: Option<&str>) -> Result<()> {
    let Some(password) = password else {
        bail!("a password is required (--password or HZS_PASSWORD)");
    };

    let outcome = client.auth.login(email, password).await?;
    let role = outcome.role.map(|r| r.to_string());
    println!("Logged in as {} (role: {})", outcome.display_name, or_dash(role.as_deref()));
    println!("Continue at {}", client.auth.post_login_target(None));
    Ok(())
}

pub fn cmd_logout(client: &LibraryClient) -> Result<()> {
    let redirect = client.auth.logout()?;
    println!("Logged out, continue at {}", redirect.to);
    Ok(())
}

pub fn cmd_whoami(client: &LibraryClient, output: OutputFormat) -> Result<()> {
    let session = &client.session;

    if output == OutputFormat::Json {
        return print_json(&serde_json::json!({
            "authenticated": session.is_authenticated(),
            "role": session.role(),
            "userFullName": session.display_name(),
        }));
    }

    let role = session.role().map(|r| r.to_string());
    println!("User:          {}", session.display_name());
    println!("Authenticated: {}", if session.is_authenticated() { "yes" } else { "no" });
    println!("Role:          {}", or_dash(role.as_deref()));
    Ok(())
}

pub fn cmd_check(client: &LibraryClient, path: &str) -> Result<()> {
    match client.routes.navigate(path, &client.session) {
        Navigation::Render(view) => println!("{} -> render '{}'", path, view),
        Navigation::Redirect(redirect) => match redirect.from {
            Some(from) => println!("{} -> redirect to {} (return to {})", path, redirect.to, from),
            None => println!("{} -> redirect to {}", path, redirect.to),
        },
    }
    Ok(())
}

// ── Books ───────────────────────────────────────────────────────────────

pub async fn cmd_books_list(client: &LibraryClient, output: OutputFormat) -> Result<()> {
    let books = client.api.books.list().await?;

    if output == OutputFormat::Json {
        return print_json(&books);
    }

    if books.is_empty() {
        println!("No books in the catalog.");
        return Ok(());
    }

    println!("{:>6}  {:<50}  {:<20}", "ID", "TITLE", "TOPIC");
    for book in &books {
        println!("{:>6}  {:<50}  {:<20}", book.book_id, book.b_name, or_dash(book.topic.as_deref()));
    }
    println!("\n{} book(s) total.", books.len());
    Ok(())
}

pub async fn cmd_books_get(client: &LibraryClient, id: i64, output: OutputFormat) -> Result<()> {
    let book = client.api.books.get(id).await?;
    let authors = client.api.books.authors(id).await?;

    if output == OutputFormat::Json {
        return print_json(&serde_json::json!({ "book": book, "authors": authors }));
    }

    println!("ID:      {}", book.book_id);
    println!("Title:   {}", book.b_name);
    println!("Topic:   {}", or_dash(book.topic.as_deref()));
    let names: Vec<String> = authors.iter().map(|a| a.full_name()).collect();
    println!("Authors: {}", if names.is_empty() { "-".to_string() } else { names.join(", ") });
    Ok(())
}

pub async fn cmd_books_delete(client: &LibraryClient, id: i64) -> Result<()> {
    client.api.books.delete(id).await?;
    println!("Book {} deleted.", id);
    Ok(())
}

pub async fn cmd_books_copies(client: &LibraryClient, id: i64, output: OutputFormat) -> Result<()> {
    let copies = client.api.books.copies(id).await?;

    if output == OutputFormat::Json {
        return print_json(&copies);
    }

    println!("{:>8}  {:<12}", "COPY", "STATUS");
    for copy in &copies {
        println!("{:>8}  {:<12}", copy.copy_id, copy.status);
    }
    let available = copies.iter().filter(|c| c.is_available()).count();
    println!("\n{} of {} copies available.", available, copies.len());
    Ok(())
}

pub async fn cmd_books_add_copy(
    client: &LibraryClient,
    id: i64,
    status: CopyStatus,
    output: OutputFormat,
) -> Result<()> {
    let copy = client.api.books.add_copy(id, &BookCopyCreate { status }).await?;

    if output == OutputFormat::Json {
        return print_json(&copy);
    }

    println!("Copy {} added to book {} ({}).", copy.copy_id, copy.book_id, copy.status);
    Ok(())
}

// ── Authors ─────────────────────────────────────────────────────────────

pub async fn cmd_authors_list(client: &LibraryClient, output: OutputFormat) -> Result<()> {
    let authors = client.api.authors.list().await?;

    if output == OutputFormat::Json {
        return print_json(&authors);
    }

    println!("{:>6}  {:<32}  {:<32}  {:<16}", "ID", "NAME", "EMAIL", "COUNTRY");
    for author in &authors {
        println!(
            "{:>6}  {:<32}  {:<32}  {:<16}",
            author.author_id,
            author.full_name(),
            author.email,
            author.country
        );
    }
    println!("\n{} author(s) total.", authors.len());
    Ok(())
}

pub async fn cmd_authors_get(client: &LibraryClient, id: i64, output: OutputFormat) -> Result<()> {
    let author = client.api.authors.get(id).await?;

    if output == OutputFormat::Json {
        return print_json(&author);
    }

    println!("ID:      {}", author.author_id);
    println!("Name:    {}", author.full_name());
    println!("Email:   {}", author.email);
    println!("Address: {}, {}, {} {}", author.street, author.city, author.state, author.country);
    Ok(())
}

// ── Rentals ─────────────────────────────────────────────────────────────

pub async fn cmd_rentals_mine(client: &LibraryClient, customer_id: i64, output: OutputFormat) -> Result<()> {
    let rentals = client.api.rentals.by_customer(customer_id).await?;

    if output == OutputFormat::Json {
        return print_json(&rentals);
    }

    if rentals.is_empty() {
        println!("No rentals.");
        return Ok(());
    }

    let now = Utc::now();
    println!("{:>6}  {:>6}  {:<10}  {:<10}  {:<10}", "ID", "COPY", "STATUS", "BORROWED", "DUE");
    for rental in &rentals {
        let status = if rental.is_overdue(now) {
            "OVERDUE"
        } else {
            rental.rental_status.as_str()
        };
        println!(
            "{:>6}  {:>6}  {:<10}  {:<10}  {:<10}",
            rental.rental_id,
            rental.copy_id,
            status,
            rental.borrow_date.format("%Y-%m-%d"),
            rental.expected_return_date.format("%Y-%m-%d"),
        );
    }
    Ok(())
}

// ── Invoices ────────────────────────────────────────────────────────────

pub async fn cmd_invoices_unpaid(client: &LibraryClient, output: OutputFormat) -> Result<()> {
    let invoices = client.api.invoices.unpaid().await?;

    if output == OutputFormat::Json {
        return print_json(&invoices);
    }

    if invoices.is_empty() {
        println!("No unpaid invoices.");
        return Ok(());
    }

    println!("{:>8}  {:<10}  {:>10}  {:>8}", "INVOICE", "DATE", "AMOUNT", "RENTAL");
    for invoice in &invoices {
        println!(
            "{:>8}  {:<10}  {:>10.2}  {:>8}",
            invoice.invoice_id,
            invoice.invoice_date.format("%Y-%m-%d"),
            invoice.amount,
            invoice.rental_id
        );
    }
    Ok(())
}

pub async fn cmd_invoices_pay(
    client: &LibraryClient,
    invoice_id: i64,
    method: PaymentMethod,
    first_name: String,
    last_name: String,
    output: OutputFormat,
) -> Result<()> {
    let payment = PaymentCreate {
        method,
        card_holder_l_name: last_name,
        card_holder_f_name: first_name,
    };
    let receipt = client.api.invoices.pay(invoice_id, &payment).await?;

    if output == OutputFormat::Json {
        return print_json(&receipt);
    }

    println!(
        "Payment {} of {:.2} recorded on {}.",
        receipt.payment_id,
        receipt.amount,
        receipt.payment_date.format("%Y-%m-%d %H:%M")
    );
    Ok(())
}

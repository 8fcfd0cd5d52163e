//! Scripted shell sessions driven through byte buffers

use sqlx::sqlite::SqlitePoolOptions;
use tokio::io::BufReader;

use libris::{
    repository::{schema, Repository},
    services::Services,
    shell::Shell,
};

async fn setup() -> (Repository, Services) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    schema::init(&pool).await.expect("Failed to create schema");

    let repository = Repository::new(pool);
    let services = Services::new(repository.clone());
    (repository, services)
}

/// Feed a scripted session to the shell and capture what it prints.
async fn run_session(services: Services, script: &str) -> String {
    let mut output = Vec::new();
    let mut shell = Shell::new(services, BufReader::new(script.as_bytes()), &mut output);
    shell.run().await.expect("session should succeed");
    String::from_utf8(output).expect("shell output should be utf-8")
}

#[tokio::test]
async fn full_session_walks_the_dune_scenario() {
    let (repository, services) = setup().await;

    let script = "1\nDune\nHerbert\nISBN1\n2\n\
                  2\nAlice\na@x.com\n\
                  3\n1\n1\n2024-01-01\n\
                  5\n\
                  6\n\
                  4\n1\n2024-01-05\n\
                  7\n";

    let output = run_session(services, script).await;

    assert!(output.contains("Library Management System"));
    assert!(output.contains("Book added with ID 1."));
    assert!(output.contains("Member added with ID 1."));
    assert!(output.contains("Book 1 issued successfully! Transaction ID 1."));
    // Listing runs after the issue, one copy out
    assert!(output.contains("ID: 1, Title: Dune, Author: Herbert, ISBN: ISBN1, Quantity: 1"));
    assert!(output.contains("ID: 1, Name: Alice, Email: a@x.com"));
    assert!(output.contains("Book returned successfully!"));
    assert!(output.contains("Exiting system..."));

    let dune = repository.books.get_by_id(1).await.expect("book");
    assert_eq!(dune.quantity, 2);
    let transaction = repository.transactions.get_by_id(1).await.expect("transaction");
    assert_eq!(transaction.return_date.as_deref(), Some("2024-01-05"));
}

#[tokio::test]
async fn invalid_choice_keeps_the_loop_alive() {
    let (_, services) = setup().await;

    let output = run_session(services, "9\n7\n").await;

    assert!(output.contains("Invalid choice, please try again."));
    assert!(output.contains("Exiting system..."));
}

#[tokio::test]
async fn refused_issue_is_reported_and_the_loop_continues() {
    let (_, services) = setup().await;

    // A book with no copies, then an issue attempt against it
    let script = "1\nDune\nHerbert\nISBN1\n0\n\
                  3\n1\n1\n2024-01-01\n\
                  7\n";
    let output = run_session(services, script).await;

    assert!(output.contains("Not available"));
    assert!(output.contains("Exiting system..."));
}

#[tokio::test]
async fn end_of_input_ends_the_session() {
    let (_, services) = setup().await;

    // No exit command; the script just runs dry
    let output = run_session(services, "6\n").await;

    assert!(output.contains("Library Members:"));
}

#[tokio::test]
async fn malformed_number_terminates_the_session() {
    let (_, services) = setup().await;

    let mut output = Vec::new();
    let mut shell = Shell::new(
        services,
        BufReader::new("3\nnot-a-number\n".as_bytes()),
        &mut output,
    );

    let result = shell.run().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn blank_date_defaults_to_today() {
    let (repository, services) = setup().await;

    let script = "1\nDune\nHerbert\nISBN1\n1\n\
                  3\n1\n1\n\n\
                  7\n";
    run_session(services, script).await;

    let transaction = repository.transactions.get_by_id(1).await.expect("transaction");
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    assert_eq!(transaction.issue_date, today);
}

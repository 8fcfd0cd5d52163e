//! Interactive menu shell
//!
//! The outward face of the system: a read-dispatch-repeat loop that
//! prints a numbered menu, prompts for each operation's typed fields,
//! calls the matching service, and prints the outcome. Generic over its
//! reader and writer so tests can drive it with byte buffers.

use anyhow::Context;
use chrono::Local;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    error::AppResult,
    models::{NewBook, NewMember},
    services::Services,
};

const MENU: &str = "\nLibrary Management System\n\
                    1. Add Book\n\
                    2. Add Member\n\
                    3. Issue Book\n\
                    4. Return Book\n\
                    5. Display Books\n\
                    6. Display Members\n\
                    7. Exit\n";

pub struct Shell<R, W> {
    services: Services,
    input: R,
    output: W,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(services: Services, input: R, output: W) -> Self {
        Self {
            services,
            input,
            output,
        }
    }

    /// Run the menu loop until the operator exits or input ends.
    ///
    /// Lending refusals are printed and the loop continues; malformed
    /// numeric input and storage failures propagate and end the program.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.write(MENU).await?;
            let Some(choice) = self.prompt("Enter your choice: ").await? else {
                break;
            };

            match choice.as_str() {
                "1" => self.add_book().await?,
                "2" => self.add_member().await?,
                "3" => self.issue_book().await?,
                "4" => self.return_book().await?,
                "5" => self.display_books().await?,
                "6" => self.display_members().await?,
                "7" => {
                    self.write("Exiting system...\n").await?;
                    break;
                }
                _ => self.write("Invalid choice, please try again.\n").await?,
            }
        }

        Ok(())
    }

    async fn add_book(&mut self) -> anyhow::Result<()> {
        let Some(title) = self.prompt("Enter book title: ").await? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Enter book author: ").await? else {
            return Ok(());
        };
        let Some(isbn) = self.prompt("Enter book ISBN: ").await? else {
            return Ok(());
        };
        let Some(quantity) = self.prompt_number("Enter book quantity: ").await? else {
            return Ok(());
        };

        let outcome = self
            .services
            .catalog
            .add_book(NewBook {
                title,
                author,
                isbn,
                quantity,
            })
            .await
            .map(|book| format!("Book added with ID {}.\n", book.id));
        self.report(outcome).await
    }

    async fn add_member(&mut self) -> anyhow::Result<()> {
        let Some(name) = self.prompt("Enter member name: ").await? else {
            return Ok(());
        };
        let Some(email) = self.prompt("Enter member email: ").await? else {
            return Ok(());
        };

        let outcome = self
            .services
            .catalog
            .add_member(NewMember { name, email })
            .await
            .map(|member| format!("Member added with ID {}.\n", member.id));
        self.report(outcome).await
    }

    async fn issue_book(&mut self) -> anyhow::Result<()> {
        let Some(member_id) = self.prompt_number("Enter member ID: ").await? else {
            return Ok(());
        };
        let Some(book_id) = self.prompt_number("Enter book ID to issue: ").await? else {
            return Ok(());
        };
        let Some(issue_date) = self.prompt_date("Enter issue date (YYYY-MM-DD): ").await? else {
            return Ok(());
        };

        let outcome = self
            .services
            .lending
            .issue_book(member_id, book_id, &issue_date)
            .await
            .map(|transaction| {
                format!(
                    "Book {} issued successfully! Transaction ID {}.\n",
                    book_id, transaction.id
                )
            });
        self.report(outcome).await
    }

    async fn return_book(&mut self) -> anyhow::Result<()> {
        let Some(transaction_id) = self.prompt_number("Enter transaction ID to return: ").await?
        else {
            return Ok(());
        };
        let Some(return_date) = self.prompt_date("Enter return date (YYYY-MM-DD): ").await? else {
            return Ok(());
        };

        let outcome = self
            .services
            .lending
            .return_book(transaction_id, &return_date)
            .await
            .map(|_| "Book returned successfully!\n".to_string());
        self.report(outcome).await
    }

    async fn display_books(&mut self) -> anyhow::Result<()> {
        let books = self.services.catalog.list_books().await?;

        let mut lines = String::from("Books in Library:\n");
        for book in books {
            lines.push_str(&format!(
                "ID: {}, Title: {}, Author: {}, ISBN: {}, Quantity: {}\n",
                book.id, book.title, book.author, book.isbn, book.quantity
            ));
        }
        self.write(&lines).await
    }

    async fn display_members(&mut self) -> anyhow::Result<()> {
        let members = self.services.catalog.list_members().await?;

        let mut lines = String::from("Library Members:\n");
        for member in members {
            lines.push_str(&format!(
                "ID: {}, Name: {}, Email: {}\n",
                member.id, member.name, member.email
            ));
        }
        self.write(&lines).await
    }

    /// Print the outcome of an operation, keeping the loop alive for
    /// lending refusals and propagating everything else.
    async fn report(&mut self, outcome: AppResult<String>) -> anyhow::Result<()> {
        match outcome {
            Ok(line) => self.write(&line).await,
            Err(e) if e.is_recoverable() => self.write(&format!("{}\n", e)).await,
            Err(e) => Err(e.into()),
        }
    }

    /// Prompt for one line of input. `None` means end of input.
    async fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        self.write(label).await?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn prompt_number(&mut self, label: &str) -> anyhow::Result<Option<i64>> {
        match self.prompt(label).await? {
            Some(text) => {
                let number = text
                    .parse()
                    .with_context(|| format!("invalid number: {:?}", text))?;
                Ok(Some(number))
            }
            None => Ok(None),
        }
    }

    /// Prompt for a date, substituting today when left empty. The text is
    /// otherwise stored as typed; nothing validates the format.
    async fn prompt_date(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        match self.prompt(label).await? {
            Some(text) if text.is_empty() => {
                Ok(Some(Local::now().format("%Y-%m-%d").to_string()))
            }
            other => Ok(other),
        }
    }

    async fn write(&mut self, text: &str) -> anyhow::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}

use outbox::{Email, EmailService};

fn main() {
    let email = Email::new(
        "Team sync notes",
        "Agenda:\n\t- roadmap\n\t- open   bugs\nSee you there.",
        "Alice@Example.COM",
        vec!["bob@example.net", "carol@example.ru", "d@example.com"],
    );

    let email = match email {
        Ok(email) => email,
        Err(e) => {
            eprintln!("Failed to build email: {e}");
            std::process::exit(1);
        }
    };

    println!("Sending to {} recipient(s)...", email.recipients.len());

    let sent = EmailService::send_email(&email);
    for (i, copy) in sent.iter().enumerate() {
        println!("--- copy #{} ---", i + 1);
        println!("{copy}");
        println!("Preview: {}", copy.short_body);
        if let Some(date) = copy.date {
            println!("Date: {date}");
        }
    }
}

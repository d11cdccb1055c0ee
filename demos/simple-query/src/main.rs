use whoq::WhoisClient;

#[tokio::main]
async fn main() {
    let client = WhoisClient::new();

    match client.query("github.com").await {
        Ok(response) => println!("{response}"),
        Err(err) => eprintln!("whois query failed: {err}"),
    }
}

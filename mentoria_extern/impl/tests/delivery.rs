use mentoria_extern_contracts::delivery::{DeliveryApiService, DeliverySendError, OutboundEmail};
use mentoria_extern_impl::delivery::{DeliveryApiServiceConfig, DeliveryApiServiceImpl};
use mentoria_testing::delivery::Mailbox;
use mentoria_utils::assert_matches;
use url::Url;

const API_KEY: &str = "test-key";

#[tokio::test]
async fn send_ok() {
    let (sut, mailbox) = make_sut(API_KEY).await;

    let id = sut.send(email()).await.unwrap().unwrap();

    let sent = mailbox.take().pop().unwrap();
    assert_eq!(*id, sent.id);
    assert_eq!(sent.from, "Mentoria <onboarding@resend.dev>");
    assert_eq!(sent.to, ["voce@seuemail.com"]);
    assert_eq!(sent.reply_to, "maria@example.com");
    assert_eq!(sent.subject, "Mentoria — Novo contato");
    assert_eq!(
        sent.text,
        "Novo contato pela landing page\n\nNome: Maria Silva\nEmail: maria@example.com\nCelular: "
    );
}

#[tokio::test]
async fn send_invalid_api_key() {
    let (sut, mailbox) = make_sut("wrong-key").await;

    let result = sut.send(email()).await;

    assert_matches!(result, Err(DeliverySendError::Api(error)) if error == "invalid api key");
    assert_eq!(mailbox.take(), []);
}

#[tokio::test]
async fn send_rejected_recipient() {
    let (sut, mailbox) = make_sut(API_KEY).await;

    let mut email = email();
    email.to = "fail@example.com".into();
    let result = sut.send(email).await;

    assert_matches!(result, Err(DeliverySendError::Api(error)) if error == "recipient rejected");
    assert_eq!(mailbox.take(), []);
}

fn email() -> OutboundEmail {
    OutboundEmail {
        from: "Mentoria <onboarding@resend.dev>".into(),
        to: "voce@seuemail.com".into(),
        reply_to: "maria@example.com".into(),
        subject: "Mentoria — Novo contato".into(),
        text: "Novo contato pela landing page\n\nNome: Maria Silva\nEmail: maria@example.com\nCelular: "
            .into(),
    }
}

async fn make_sut(api_key: &str) -> (DeliveryApiServiceImpl, Mailbox) {
    let (router, mailbox) = mentoria_testing::delivery::router_with_mailbox(API_KEY.into());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint: Url = format!("http://{}/emails", listener.local_addr().unwrap())
        .parse()
        .unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

    let config = DeliveryApiServiceConfig::new(Some(endpoint), api_key.into());
    (DeliveryApiServiceImpl::new(config), mailbox)
}

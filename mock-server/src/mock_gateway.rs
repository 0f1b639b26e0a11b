use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use hyper::Request;
use hyper::body::Incoming;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server;
use log::{error, trace};
use quick_xml::Reader;
use quick_xml::escape::{escape, resolve_xml_entity};
use quick_xml::events::Event;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_service::Service;

pub const SERVICE_PATH: &str = "/axis2/services/DTServerModuleService_v1";
const NAMESPACE: &str = "urn:DTServerModuleService_v1";

/// Replies from `slowshop` take this long.
pub const SLOW_REPLY: Duration = Duration::from_secs(5);

pub struct MockGateway;

impl MockGateway {
    pub async fn listen(address: &str) {
        let listener = TcpListener::bind(address)
            .await
            .expect("Could not bind mock gateway");

        Self::serve(listener).await;
    }

    /// Starts the gateway on a free local port in a background thread and returns its address.
    pub fn spawn() -> SocketAddr {
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("Could not bind mock gateway");
        listener
            .set_nonblocking(true)
            .expect("Could not configure mock gateway socket");
        let address = listener
            .local_addr()
            .expect("Could not get mock gateway address");

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("Could not create mock gateway runtime");

            rt.block_on(async move {
                let listener =
                    TcpListener::from_std(listener).expect("Could not register mock gateway socket");
                Self::serve(listener).await;
            });
        });

        address
    }

    pub async fn serve(listener: TcpListener) {
        let app = Router::new().route(SERVICE_PATH, post(Self::soap));

        loop {
            let (socket, _remote_addr) = match listener.accept().await {
                Ok(l) => l,
                Err(error) => {
                    error!("Could not accept connection: {error}");
                    continue;
                }
            };

            let tower_service = app.clone();

            tokio::spawn(async move {
                let socket = TokioIo::new(socket);
                let hyper_service =
                    hyper::service::service_fn(move |request: Request<Incoming>| {
                        tower_service.clone().call(request)
                    });

                let builder = server::conn::auto::Builder::new(TokioExecutor::new());
                if let Err(err) = builder.serve_connection(socket, hyper_service).await {
                    error!("Failed to serve connection: {err:#}");
                }
            });
        }
    }

    async fn soap(body: String) -> impl IntoResponse {
        trace!("C: {body}");

        let (status, reply) = match parse_call(&body) {
            Some((operation, attributes)) => Self::reply(&operation, &attributes).await,
            None => (
                StatusCode::INTERNAL_SERVER_ERROR,
                fault("soapenv:Client", "Malformed request"),
            ),
        };

        trace!("S: {reply}");
        (
            status,
            [(header::CONTENT_TYPE, "text/xml; charset=utf-8")],
            reply,
        )
    }

    async fn reply(operation: &str, attributes: &HashMap<String, String>) -> (StatusCode, String) {
        let attribute = |name: &str| attributes.get(name).map(String::as_str).unwrap_or("");

        match attribute("shopName") {
            "slowshop" => tokio::time::sleep(SLOW_REPLY).await,
            "faultshop" => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    fault("soapenv:Server", "Internal error"),
                );
            }
            _ => (),
        }

        let logged_in = attribute("shopName") == "testshop"
            && attribute("userName") == "testing"
            && attribute("password") == "123456";

        let fields = if !logged_in {
            vec![
                field("resultCode", "336"),
                field("resultText", "336 web_service_login_failed"),
            ]
        } else if operation == "refund" && attribute("verifyID") == "-1" {
            vec![
                field("resultCode", "400"),
                field("resultText", "error_transID_or_verifyID"),
            ]
        } else {
            let verify_id = match attribute("verifyID") {
                "" => "1234567",
                verify_id => verify_id,
            };

            vec![
                field("resultCode", "200"),
                field("resultText", "OK"),
                field("verifyID", verify_id),
                field("amount", attribute("amount")),
                field("infoDescription", &format!("{operation} for {}", attribute("transID"))),
                "<acquirerAddress><street>Storgatan 1</street><city>Stockholm</city></acquirerAddress>"
                    .to_string(),
                "<errorMsg xsi:nil=\"true\"/>".to_string(),
            ]
        };

        (StatusCode::OK, return_envelope(operation, &fields))
    }
}

/// Reads the operation name and its attributes from an RPC request envelope.
fn parse_call(xml: &str) -> Option<(String, HashMap<String, String>)> {
    let mut reader = Reader::from_str(xml);
    let mut path: Vec<String> = Vec::new();
    let mut operation = None;
    let mut attributes = HashMap::new();

    loop {
        match reader.read_event().ok()? {
            Event::Start(element) => {
                let name = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
                if path.last().map(String::as_str) == Some("Body") {
                    operation = Some(name.clone());
                }

                path.push(name);
            }
            Event::Empty(element) if path.len() == 3 => {
                let name = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
                attributes.insert(name, String::new());
            }
            Event::End(_) => {
                path.pop();
            }
            Event::Text(text) if path.len() == 4 => {
                let text = text.decode().ok()?;
                push_text(&mut attributes, &path[3], &text);
            }
            Event::GeneralRef(reference) if path.len() == 4 => {
                let resolved = match reference.resolve_char_ref().ok()? {
                    Some(c) => c.to_string(),
                    None => resolve_xml_entity(&reference.decode().ok()?)?.to_string(),
                };
                push_text(&mut attributes, &path[3], &resolved);
            }
            Event::Eof => break,
            _ => (),
        }
    }

    operation.map(|operation| (operation, attributes))
}

fn push_text(attributes: &mut HashMap<String, String>, name: &str, text: &str) {
    attributes.entry(name.to_string()).or_default().push_str(text);
}

fn field(name: &str, value: &str) -> String {
    format!("<{name}>{}</{name}>", escape(value))
}

fn return_envelope(operation: &str, fields: &[String]) -> String {
    format!(
        "<?xml version='1.0' encoding='utf-8'?>\
        <soapenv:Envelope xmlns:soapenv=\"http://schemas.xmlsoap.org/soap/envelope/\" \
                          xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\
            <soapenv:Body>\
                <ns:{operation}Response xmlns:ns=\"{NAMESPACE}\">\
                    <return>{}</return>\
                </ns:{operation}Response>\
            </soapenv:Body>\
        </soapenv:Envelope>",
        fields.concat()
    )
}

fn fault(code: &str, message: &str) -> String {
    format!(
        "<?xml version='1.0' encoding='utf-8'?>\
        <soapenv:Envelope xmlns:soapenv=\"http://schemas.xmlsoap.org/soap/envelope/\">\
            <soapenv:Body>\
                <soapenv:Fault>\
                    <faultcode>{code}</faultcode>\
                    <faultstring>{}</faultstring>\
                </soapenv:Fault>\
            </soapenv:Body>\
        </soapenv:Envelope>",
        escape(message)
    )
}

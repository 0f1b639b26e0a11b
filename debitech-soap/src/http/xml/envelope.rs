use crate::transport::Request;
use quick_xml::escape::escape;
use serde::Deserialize;

/// Builds the SOAP 1.1 RPC envelope for a request.
pub(crate) fn request_envelope(request: &Request, namespace: &str) -> String {
    let operation = request.operation.remote_name();
    let namespace = escape(namespace);

    let mut xml = format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
        <soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\" \
                       xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
                       xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\" \
                       xmlns:ns=\"{namespace}\">\
            <soap:Body>\
                <ns:{operation}>"
    );

    for (name, value) in request.ordered_attributes() {
        let value = value.to_string();
        xml.push_str(&format!("<{name}>{}</{name}>", escape(value.as_str())));
    }

    xml.push_str(&format!("</ns:{operation}></soap:Body></soap:Envelope>"));
    xml
}

#[derive(Deserialize)]
pub(crate) struct FaultEnvelope {
    #[serde(rename = "Body")]
    pub soap_body: FaultBody,
}

#[derive(Deserialize)]
pub(crate) struct FaultBody {
    #[serde(rename = "Fault")]
    pub fault: Fault,
}

#[derive(Deserialize)]
pub(crate) struct Fault {
    #[serde(rename = "faultcode")]
    pub fault_code: String,
    #[serde(rename = "faultstring")]
    pub fault_string: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::value::Value;
    use crate::operation::Operation;

    #[test]
    fn writes_operation_and_escaped_attributes() {
        let request = Request {
            operation: Operation::AuthReversal,
            attributes: [
                ("shopName", Value::from("Fish & Chips")),
                ("amount", Value::from(500)),
                ("extra", Value::from("<b>")),
            ]
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect(),
        };

        let xml = request_envelope(&request, "urn:DTServerModuleService_v1");

        assert!(xml.contains("xmlns:ns=\"urn:DTServerModuleService_v1\""));
        assert!(xml.contains(
            "<ns:authReversal><shopName>Fish &amp; Chips</shopName><amount>500</amount>\
            <extra>&lt;b&gt;</extra></ns:authReversal>"
        ));
    }
}

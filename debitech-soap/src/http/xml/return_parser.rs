use crate::errors::transport_error::TransportError;
use crate::http::xml::envelope::FaultEnvelope;
use crate::models::return_data::{Field, ReturnData};
use quick_xml::Reader;
use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::{BytesStart, Event};

/// Reads the `return` element of an RPC response envelope. A SOAP fault in the body becomes
/// [TransportError::Fault].
pub(crate) fn parse_response(xml: &str) -> Result<ReturnData, TransportError> {
    let mut reader = Reader::from_str(xml);

    seek_child(&mut reader, |name| name == b"Body")?;

    let response = seek_child(&mut reader, |_| true)?;
    if response == "Fault" {
        let envelope: FaultEnvelope = quick_xml::de::from_str(xml)?;
        return Err(TransportError::Fault {
            code: envelope.soap_body.fault.fault_code,
            message: envelope.soap_body.fault.fault_string,
        });
    }

    // Older SOAP stacks name the element `m_return`
    seek_child(&mut reader, |name| name == b"return" || name == b"m_return")?;
    read_fields(&mut reader)
}

/// Advances to the next start tag whose local name matches, returning that name.
fn seek_child(
    reader: &mut Reader<&[u8]>,
    matches: impl Fn(&[u8]) -> bool,
) -> Result<String, TransportError> {
    loop {
        match reader.read_event()? {
            Event::Start(element) if matches(element.local_name().as_ref()) => {
                return Ok(local_name(&element));
            }
            Event::Eof => return Err(TransportError::MissingReturn),
            _ => (),
        }
    }
}

fn read_fields(reader: &mut Reader<&[u8]>) -> Result<ReturnData, TransportError> {
    let mut data = ReturnData::new();

    loop {
        match reader.read_event()? {
            Event::Start(element) => {
                let name = local_name(&element);
                let field = if is_nil(&element) {
                    skip_element(reader)?;
                    Field::Nil
                } else {
                    read_field(reader)?
                };

                data.insert(&name, field);
            }
            Event::Empty(element) => {
                let field = if is_nil(&element) {
                    Field::Nil
                } else {
                    Field::Scalar(String::new())
                };

                data.insert(&local_name(&element), field);
            }
            Event::End(_) => return Ok(data),
            Event::Eof => return Err(TransportError::Xml("unexpected end of document".to_string())),
            _ => (),
        }
    }
}

/// Reads a field whose start tag was just consumed, up to and including its end tag.
fn read_field(reader: &mut Reader<&[u8]>) -> Result<Field, TransportError> {
    let mut text = String::new();
    let mut nested = false;
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(_) => {
                nested = true;
                depth += 1;
            }
            Event::Empty(_) => nested = true,
            Event::End(_) if depth == 0 => break,
            Event::End(_) => depth -= 1,
            Event::Text(content) if depth == 0 => text.push_str(&content.decode().map_err(xml_error)?),
            Event::CData(content) if depth == 0 => text.push_str(&content.decode().map_err(xml_error)?),
            Event::GeneralRef(reference) if depth == 0 => {
                if let Some(c) = reference.resolve_char_ref().map_err(xml_error)? {
                    text.push(c);
                } else {
                    let name = reference.decode().map_err(xml_error)?;
                    let resolved = resolve_xml_entity(&name)
                        .ok_or_else(|| TransportError::Xml(format!("unknown entity &{name};")))?;
                    text.push_str(resolved);
                }
            }
            Event::Eof => return Err(TransportError::Xml("unexpected end of document".to_string())),
            _ => (),
        }
    }

    if nested {
        Ok(Field::Nested)
    } else {
        Ok(Field::Scalar(text.trim().to_string()))
    }
}

fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), TransportError> {
    read_field(reader).map(|_| ())
}

fn is_nil(element: &BytesStart) -> bool {
    element.attributes().flatten().any(|attribute| {
        attribute.key.local_name().as_ref() == b"nil" && attribute.value.as_ref() == b"true"
    })
}

fn local_name(element: &BytesStart) -> String {
    String::from_utf8_lossy(element.local_name().as_ref()).into_owned()
}

fn xml_error(error: impl std::fmt::Display) -> TransportError {
    TransportError::Xml(error.to_string())
}

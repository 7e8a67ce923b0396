use multiaddr::{Multiaddr, Protocol};

use rst_common::with_errors::thiserror::{self, Error};

#[derive(Debug, Error, PartialEq)]
pub enum EndpointError {
    #[error("endpoint error: invalid addr: {0}")]
    InvalidMultiAddr(String),

    #[error("endpoint error: empty addr")]
    EmptyMultiAddr,
}

/// `build_endpoint` used to parse given [`Multiaddr`] object into the ledger endpoint url
///
/// Only three protocols accepted as the host:
///
/// - [`Protocol::Ip4`]
/// - [`Protocol::Dns`]
/// - [`Protocol::Dns4`]
///
/// When the second component is not a [`Protocol::Tcp`], the port fallback to `80`
pub fn build_endpoint(addr: Multiaddr) -> Result<String, EndpointError> {
    if addr.is_empty() {
        return Err(EndpointError::EmptyMultiAddr);
    }

    let components = addr.iter().collect::<Vec<_>>();
    if components.len() < 2 {
        return Err(EndpointError::InvalidMultiAddr(String::from(
            "multiaddr length not valid",
        )));
    }

    let host = {
        match &components[0] {
            Protocol::Ip4(ip) => Ok(format!("http://{}", ip)),
            Protocol::Dns(dns) | Protocol::Dns4(dns) => Ok(format!("http://{}", dns)),
            protocol => Err(EndpointError::InvalidMultiAddr(format!(
                "unknown protocol: {}",
                protocol
            ))),
        }
    }?;

    let port = {
        match components[1] {
            Protocol::Tcp(port) => port,
            _ => 80,
        }
    };

    Ok(format!("{}:{}", host, port))
}

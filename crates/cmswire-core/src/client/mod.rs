//! Typed client over a caller-supplied transport.
//!
//! The client only assembles requests: it maps and strips payloads, wraps
//! them in the envelope, plans populate paths, and decodes responses. How
//! bytes move is up to the `Transport`.

mod config;
mod transport;


pub use config::{
    API_PREFIX_KEY, ClientConfig, ConfigError, DEFAULT_API_PREFIX, POPULATE_DEPTH_KEY,
    READ_MODE_KEY,
};
pub use transport::{Method, Request, Transport, TransportError};

use crate::{
    Error,
    model::Marker,
    plan::{plan_for, populate_query},
    read::{self, ReadError},
    traits::Content,
    wire::WireNode,
    write,
};
use serde::de::DeserializeOwned;
use thiserror::Error as ThisError;
use tracing::debug;

///
/// ClientError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ClientError {
    #[error("type '{path}' is not a collection type")]
    NotCollection { path: &'static str },

    #[error("type '{path}' is not a single type")]
    NotSingle { path: &'static str },

    #[error("type '{path}' has no document id to address")]
    MissingDocumentId { path: &'static str },
}

/// API name of a collection type, after validating its model.
pub fn collection_name<T: Content>() -> Result<&'static str, Error> {
    let model = T::model();
    model.validate()?;

    match model.marker {
        Some(Marker::Collection(name)) => Ok(name),
        _ => Err(ClientError::NotCollection { path: model.path }.into()),
    }
}

/// API name of a single type, after validating its model.
pub fn single_name<T: Content>() -> Result<&'static str, Error> {
    let model = T::model();
    model.validate()?;

    match model.marker {
        Some(Marker::Singleton(name)) => Ok(name),
        _ => Err(ClientError::NotSingle { path: model.path }.into()),
    }
}

///
/// ContentClient
///

#[derive(Debug)]
pub struct ContentClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> ContentClient<T> {
    pub const fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    // ---------------------------------------------------------------------
    // collection types
    // ---------------------------------------------------------------------

    /// POST a new entry and decode the stored entry.
    pub fn create<C>(&self, value: &C) -> Result<C, Error>
    where
        C: Content + DeserializeOwned,
    {
        let path = self.path(collection_name::<C>()?, None);
        let request = Request::new(Method::Post, path).with_body(Self::body(value)?);

        self.decode_one(&request)
    }

    /// PUT an existing entry, addressed by its own document id.
    pub fn update<C>(&self, value: &C) -> Result<C, Error>
    where
        C: Content + DeserializeOwned,
    {
        let name = collection_name::<C>()?;
        let document_id = value.document_id().ok_or(ClientError::MissingDocumentId {
            path: C::model().path,
        })?;
        let path = self.path(name, Some(document_id));
        let request = Request::new(Method::Put, path).with_body(Self::body(value)?);

        self.decode_one(&request)
    }

    /// GET one entry with its populate plan applied.
    pub fn find_one<C>(&self, document_id: &str) -> Result<C, Error>
    where
        C: Content + DeserializeOwned,
    {
        let name = collection_name::<C>()?;
        let document_id = Self::addressable::<C>(document_id)?;
        let request = Request::new(Method::Get, self.path(name, Some(document_id)))
            .with_query(self.populate::<C>());

        self.decode_one(&request)
    }

    /// GET every entry of a collection with its populate plan applied.
    pub fn find_many<C>(&self) -> Result<Vec<C>, Error>
    where
        C: Content + DeserializeOwned,
    {
        let name = collection_name::<C>()?;
        let request =
            Request::new(Method::Get, self.path(name, None)).with_query(self.populate::<C>());
        let data = self.send(&request)?;

        Ok(read::decode_list(data, self.config.read_mode)?)
    }

    /// DELETE one entry. The response body is ignored.
    pub fn delete<C: Content>(&self, document_id: &str) -> Result<(), Error> {
        let name = collection_name::<C>()?;
        let document_id = Self::addressable::<C>(document_id)?;
        let request = Request::new(Method::Delete, self.path(name, Some(document_id)));

        debug!(method = %request.method, path = %request.path, "sending request");
        self.transport.send(&request)?;

        Ok(())
    }

    // ---------------------------------------------------------------------
    // single types
    // ---------------------------------------------------------------------

    /// GET the single instance with its populate plan applied.
    pub fn find_single<C>(&self) -> Result<C, Error>
    where
        C: Content + DeserializeOwned,
    {
        let request = Request::new(Method::Get, self.path(single_name::<C>()?, None))
            .with_query(self.populate::<C>());

        self.decode_one(&request)
    }

    /// PUT the single instance.
    pub fn update_single<C>(&self, value: &C) -> Result<C, Error>
    where
        C: Content + DeserializeOwned,
    {
        let request = Request::new(Method::Put, self.path(single_name::<C>()?, None))
            .with_body(Self::body(value)?);

        self.decode_one(&request)
    }

    // ---------------------------------------------------------------------
    // helpers
    // ---------------------------------------------------------------------

    fn path(&self, name: &str, document_id: Option<&str>) -> String {
        let prefix = &self.config.api_prefix;

        match document_id {
            Some(id) => format!("{prefix}/{name}/{id}"),
            None => format!("{prefix}/{name}"),
        }
    }

    fn populate<C: Content>(&self) -> Vec<(String, String)> {
        populate_query(&plan_for::<C>(self.config.populate_depth))
    }

    fn addressable<C: Content>(document_id: &str) -> Result<&str, ClientError> {
        let trimmed = document_id.trim();

        if trimmed.is_empty() {
            Err(ClientError::MissingDocumentId {
                path: C::model().path,
            })
        } else {
            Ok(trimmed)
        }
    }

    fn body<C: Content>(value: &C) -> Result<WireNode, Error> {
        Ok(read::envelope(write::prepare_for_write(value)?))
    }

    fn decode_one<C>(&self, request: &Request) -> Result<C, Error>
    where
        C: Content + DeserializeOwned,
    {
        let data = self.send(request)?;

        Ok(read::decode(data, self.config.read_mode)?)
    }

    // Send and unwrap the response envelope.
    fn send(&self, request: &Request) -> Result<WireNode, Error> {
        debug!(
            method = %request.method,
            path = %request.path,
            populate = request.query.len(),
            "sending request"
        );

        let bytes = self.transport.send(request)?;
        let node: WireNode = serde_json::from_slice(&bytes).map_err(ReadError::from)?;

        Ok(read::unwrap_envelope(node)?)
    }
}

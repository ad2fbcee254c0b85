// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! HTTP implementation of the playlist service client.

use std::time::Duration;

use log::debug;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    api::{ApiError, PlaylistApi, Result},
    config::AppConfig,
    model::{Playlist, PlaylistId, Song, SongId},
};

#[derive(Serialize)]
struct CreatePlaylistRequest<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddSongRequest {
    song_id: SongId,
}

/// Playlist service client backed by a blocking `ureq` agent.
pub(crate) struct HttpPlaylistApi {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpPlaylistApi {
    /// Creates a client for the service at `config.api_base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the URL is empty or is not an
    /// `http`/`https` URL.
    pub(crate) fn new(config: &AppConfig) -> Result<Self> {
        let base_url = config.api_base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(format!(
                "{base_url} must start with http:// or https://"
            )));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("playlist-tui/", env!("CARGO_PKG_VERSION")))
            .build();

        Ok(Self { agent, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("GET {path}");
        let response = self.agent.get(&self.url(path)).call()?;
        parse(response)
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        debug!("POST {path}");
        let response = self.agent.post(&self.url(path)).send_json(body)?;
        parse(response)
    }

    fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("DELETE {path}");
        let response = self.agent.delete(&self.url(path)).call()?;
        parse(response)
    }
}

fn parse<T: DeserializeOwned>(response: ureq::Response) -> Result<T> {
    response
        .into_json()
        .map_err(|e| ApiError::Parse(e.to_string()))
}

impl PlaylistApi for HttpPlaylistApi {
    fn fetch_songs(&self) -> Result<Vec<Song>> {
        self.get("/songs")
    }

    fn fetch_playlists(&self) -> Result<Vec<Playlist>> {
        self.get("/playlists")
    }

    fn create_playlist(&self, name: &str) -> Result<Playlist> {
        self.post("/playlists", &CreatePlaylistRequest { name })
    }

    fn add_song(&self, playlist_id: PlaylistId, song_id: SongId) -> Result<Playlist> {
        self.post(
            &format!("/playlists/{playlist_id}/songs"),
            &AddSongRequest { song_id },
        )
    }

    fn remove_song(&self, playlist_id: PlaylistId, song_id: SongId) -> Result<Playlist> {
        self.delete(&format!("/playlists/{playlist_id}/songs/{song_id}"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path},
    };

    use super::*;

    fn config_for(url: &str) -> AppConfig {
        AppConfig {
            api_base_url: url.to_string(),
            ..AppConfig::default()
        }
    }

    fn client_for(server: &MockServer) -> HttpPlaylistApi {
        HttpPlaylistApi::new(&config_for(&server.uri())).unwrap()
    }

    /// Runs a blocking client call off the async test runtime.
    async fn blocking<T, F>(api: HttpPlaylistApi, f: F) -> T
    where
        T: Send + 'static,
        F: FnOnce(&HttpPlaylistApi) -> T + Send + 'static,
    {
        tokio::task::spawn_blocking(move || f(&api)).await.unwrap()
    }

    #[test]
    fn rejects_empty_url() {
        let result = HttpPlaylistApi::new(&config_for("   "));
        assert!(matches!(result, Err(ApiError::InvalidUrl(msg)) if msg.contains("empty")));
    }

    #[test]
    fn rejects_non_http_url() {
        let result = HttpPlaylistApi::new(&config_for("ftp://example.com"));
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn trailing_slash_is_normalised() {
        let api = HttpPlaylistApi::new(&config_for("http://localhost:3000/api/")).unwrap();
        assert_eq!(api.url("/songs"), "http://localhost:3000/api/songs");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn fetches_songs_and_playlists() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/songs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "title": "A", "artist": "X"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/playlists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2, "name": "Mix", "songs": [{"id": 1, "title": "A", "artist": "X"}]},
                {"id": 3, "name": "Bare"}
            ])))
            .mount(&server)
            .await;

        let api = client_for(&server);
        let (songs, playlists) =
            blocking(api, |api| (api.fetch_songs().unwrap(), api.fetch_playlists().unwrap())).await;

        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].title, "A");
        assert_eq!(playlists.len(), 2);
        assert_eq!(playlists[0].songs[0].artist, "X");
        assert!(playlists[1].songs.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn create_sends_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/playlists"))
            .and(body_json(json!({"name": "Mix"})))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"id": 2, "name": "Mix", "songs": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let api = client_for(&server);
        let created = blocking(api, |api| api.create_playlist("Mix")).await.unwrap();

        assert_eq!(created.id, 2);
        assert_eq!(created.name, "Mix");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn add_song_sends_camel_case_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/playlists/2/songs"))
            .and(body_json(json!({"songId": 1})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 2, "name": "Mix", "songs": [{"id": 1, "title": "A", "artist": "X"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = client_for(&server);
        let updated = blocking(api, |api| api.add_song(2, 1)).await.unwrap();

        assert_eq!(updated.songs.len(), 1);
        assert_eq!(updated.songs[0].id, 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn remove_song_uses_delete() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/playlists/2/songs/1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 2, "name": "Mix", "songs": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let api = client_for(&server);
        let updated = blocking(api, |api| api.remove_song(2, 1)).await.unwrap();

        assert!(updated.songs.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn error_status_becomes_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/playlists/9/songs/1"))
            .respond_with(ResponseTemplate::new(404).set_body_string("playlist not found"))
            .mount(&server)
            .await;

        let api = client_for(&server);
        let result = blocking(api, |api| api.remove_song(9, 1)).await;

        match result {
            Err(ApiError::Server { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "playlist not found");
            }
            other => panic!("Expected server error, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn malformed_body_becomes_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/songs"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let api = client_for(&server);
        let result = blocking(api, |api| api.fetch_songs()).await;

        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[test]
    fn unreachable_server_becomes_transport_error() {
        // Port 9 (discard) is not expected to be listening locally.
        let api = HttpPlaylistApi::new(&config_for("http://127.0.0.1:9")).unwrap();
        assert!(matches!(api.fetch_songs(), Err(ApiError::Unreachable(_))));
    }
}

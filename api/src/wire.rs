/// League REST API raw wire types — serde shapes for the FutNorte backend.
/// Field names follow the backend's Spanish JSON contract; these map to the
/// clean domain types via the map_* functions in client.rs.
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enfrentamientos (matches)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EnfrentamientoWire {
    pub id: Option<u32>,
    pub torneo_id: Option<u32>,
    pub equipo_local_id: Option<u32>,
    pub equipo_visitante_id: Option<u32>,
    /// Display names; ids above are the authoritative references.
    pub equipo_local: Option<String>,
    pub equipo_visitante: Option<String>,
    pub fecha_hora: Option<String>,
    pub cancha: Option<String>,
    pub estado: Option<String>,
    pub goles_local: Option<u32>,
    pub goles_visitante: Option<u32>,
    #[serde(default)]
    pub goles_jugadores_local: Vec<GolJugadorWire>,
    #[serde(default)]
    pub goles_jugadores_visitante: Vec<GolJugadorWire>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GolJugadorWire {
    pub jugador_id: Option<u32>,
    pub nombre_jugador: Option<String>,
    pub apellido_jugador: Option<String>,
    pub cantidad_goles: Option<u32>,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CrearEnfrentamientoBody {
    pub torneo_id: u32,
    pub equipo_local_id: u32,
    pub equipo_visitante_id: u32,
    pub fecha_hora: String,
    pub cancha: String,
}

/// Partial update body; absent fields are omitted entirely so the backend
/// leaves them untouched.
#[derive(Debug, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActualizarEnfrentamientoBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hora: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goles_local: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goles_visitante: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goles_jugadores_local: Option<Vec<GolJugadorBody>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goles_jugadores_visitante: Option<Vec<GolJugadorBody>>,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GolJugadorBody {
    pub jugador_id: u32,
    pub cantidad_goles: u32,
}

// ---------------------------------------------------------------------------
// Jugadores (players) / Equipos (teams) / Torneos (tournaments)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JugadorWire {
    pub id: Option<u32>,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub identificacion: Option<String>,
    pub nacionalidad: Option<String>,
    pub equipo_id: Option<u32>,
}

/// Team responses also carry standings counters (puntos, partidosJugados,
/// golesAFavor, ...) which this console never reads; serde drops them.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EquipoWire {
    pub id: Option<u32>,
    pub nombre: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TorneoWire {
    pub id: Option<u32>,
    pub nombre: Option<String>,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::PoolId;
use crate::mapper::Model;
use crate::schema::{FieldKind, FieldSpec, ModelSchema};

pub const ATTENDANCE_SCHEMA: ModelSchema = ModelSchema::new(
    "AttendanceListResponseModel",
    &[
        FieldSpec::required("poolId", "Sede", FieldKind::Integer),
        FieldSpec::optional("poolName", "Nombre de la sede", FieldKind::Text),
        FieldSpec::required("attendanceDate", "Fecha", FieldKind::Date),
        FieldSpec::required("totalAttendance", "Asistencia total", FieldKind::Integer),
        FieldSpec::optional("members", "Socios", FieldKind::Integer),
        FieldSpec::optional("guests", "Invitados", FieldKind::Integer),
    ],
);

/// Attendance totals of one pool for one day.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceListResponse {
    pub pool_id: PoolId,
    pub pool_name: Option<String>,
    pub attendance_date: NaiveDate,
    pub total_attendance: i64,
    pub members: Option<i64>,
    pub guests: Option<i64>,
}

impl Model for AttendanceListResponse {
    const SCHEMA: &'static ModelSchema = &ATTENDANCE_SCHEMA;
}

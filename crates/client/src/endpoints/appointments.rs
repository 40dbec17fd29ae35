use gobarber_core::{
    errors::BookResult,
    models::appointment::{Appointment, CreateAppointmentRequest},
};

use crate::HttpApi;

pub async fn create_appointment(
    api: &HttpApi,
    request: &CreateAppointmentRequest,
) -> BookResult<Appointment> {
    api.send(api.post("appointments").json(request)).await
}

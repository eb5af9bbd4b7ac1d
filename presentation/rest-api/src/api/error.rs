use poem_openapi::Object;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Extra context, e.g. the name of a missing input variable
    #[oai(skip_serializing_if_is_none)]
    pub detail: Option<String>,
}

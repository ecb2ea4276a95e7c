//! The fixed instruction sent with every analysis request.

/// Asks the model to read the label and answer in exactly one of the two
/// JSON shapes the parser accepts.
pub const ANALYSIS_PROMPT: &str = "\
You are reading a photograph of a product's ingredient label. Find the \
ingredient list in the image. For every ingredient, return its exact \
printed name and a short plain-language explanation of what it is, \
translating chemical or scientific names into terms a shopper would \
recognize. Respond with JSON only, no prose and no markdown, using \
exactly one of these two shapes: \
{\"ingredients\":[{\"name\":\"...\",\"explanation\":\"...\"}]} when an \
ingredient list is found, or \
{\"ingredients\":[],\"message\":\"...\"} when no ingredient list is \
visible in the image.";

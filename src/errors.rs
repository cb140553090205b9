error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
        RdfXml(::rio_xml::RdfXmlError);
    }

    errors {
        InvalidView(valid: Vec<String>) {
            description("The _view parameter is invalid")
            display(
                "The _view parameter is invalid. For this object, it must be one of {}.",
                valid.join(", ")
            )
        }

        InvalidMimetype(valid: Vec<String>) {
            description("The _format parameter is invalid")
            display(
                "The _format parameter is invalid. For this view, the format should be one of {}.",
                valid.join(", ")
            )
        }

        InvalidPagination(t: String) {
            description("Invalid paging parameters")
            display("{}", t)
        }

        NoData {
            description("Upstream reported no data")
        }

        MalformedXml(t: String) {
            description("Upstream returned malformed XML")
            display("Malformed upstream XML: {}", t)
        }

        InvalidDate(t: String) {
            description("Upstream returned a date in an unexpected format")
            display("Invalid date: {}", t)
        }

        UnsupportedSerialization(mime: String) {
            description("No serializer for mimetype")
            display("No serializer is registered for {}", mime)
        }

        InvalidCapabilities(t: String) {
            description("The capability table is inconsistent")
            display("Invalid capability table: {}", t)
        }

        UpstreamUnavailable(t: String) {
            description("The upstream XML API could not be reached")
            display("Upstream unavailable: {}", t)
        }

        Timeout

        Template(t: String) {
            description("Error rendering template")
            display("Template error: {}", t)
        }
    }
}

//! HTML rendering. Templates are compiled into the binary; `.html` templates
//! are auto-escaped, so file names are safe to echo back.

use minijinja::{context, Environment};

use arxready_common::PaperKind;

use crate::dropzone::{View, DRAG_ACTIVE_PROMPT, IDLE_PROMPT, SUBMISSION_FAILED_MESSAGE};

const PAGE: &str = "page.html";
const WIDGET: &str = "widget.html";

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(PAGE, include_str!("../templates/page.html"))?;
        env.add_template(WIDGET, include_str!("../templates/widget.html"))?;
        env.add_template("upload.html", include_str!("../templates/upload.html"))?;
        env.add_template("result.html", include_str!("../templates/result.html"))?;
        Ok(Self { env })
    }

    /// The whole page around the given widget state.
    pub fn page(&self, view: &View) -> Result<String, minijinja::Error> {
        self.render(PAGE, view)
    }

    /// Only the widget, for in-place replacement by the client script.
    pub fn fragment(&self, view: &View) -> Result<String, minijinja::Error> {
        self.render(WIDGET, view)
    }

    fn render(&self, name: &str, view: &View) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(context! {
            view => view,
            accept => accept_attribute(),
            idle_prompt => IDLE_PROMPT,
            drag_active_prompt => DRAG_ACTIVE_PROMPT,
            failure_message => SUBMISSION_FAILED_MESSAGE,
        })
    }
}

/// Value for the file input's `accept` attribute: every MIME type and extension.
pub fn accept_attribute() -> String {
    PaperKind::ALL
        .iter()
        .flat_map(|k| [k.mime(), k.extension()])
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dropzone::Dropzone;
    use arxready_common::{DroppedFile, Verdict};

    #[test]
    fn test_accept_attribute_lists_both_kinds() {
        assert_eq!(accept_attribute(), "application/pdf,.pdf,text/plain,.txt");
    }

    #[test]
    fn test_initial_page_submits_without_script() {
        let html = Templates::new().unwrap().page(&Dropzone::new().view()).unwrap();
        assert!(html.contains("Is Your Paper Ready"));
        assert!(html.contains(IDLE_PROMPT));
        assert!(html.contains(r#"name="file""#));
        assert!(html.contains(r#"<button id="submit-button" type="submit" class="btn btn-primary btn-block">Submit</button>"#));
        assert!(!html.contains("disabled"));
        assert!(html.contains("How to Use"));
        assert!(html.contains("About the Project"));
    }

    #[test]
    fn test_file_name_is_escaped() {
        let mut dz = Dropzone::new();
        dz.on_drop(vec![DroppedFile::new("<script>x</script>.pdf", Some("application/pdf"), b"%PDF".to_vec())])
            .unwrap();
        let html = Templates::new().unwrap().fragment(&dz.view()).unwrap();
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_result_fragments() {
        let templates = Templates::new().unwrap();
        let mut dz = Dropzone::new();
        dz.on_drop(vec![DroppedFile::new("p.txt", Some("text/plain"), b"x".to_vec())]).unwrap();
        dz.begin_submit();
        dz.finish::<String>(Ok(Verdict::approved()));

        let yes = templates.fragment(&dz.view()).unwrap();
        assert!(yes.contains(r#"data-view="result""#));
        assert!(yes.contains("This paper is ready for arXiv"));
        assert!(yes.contains("Submit Another Paper"));

        let no = templates.fragment(&View::Result { approved: false }).unwrap();
        assert!(no.contains("This paper is not ready for arXiv"));
        assert!(!no.contains("This paper is ready for arXiv"));
    }

    #[test]
    fn test_error_banner_hidden_until_failure() {
        let templates = Templates::new().unwrap();
        let idle = templates.fragment(&Dropzone::new().view()).unwrap();
        assert!(idle.contains(r#"role="alert" hidden>"#));

        let mut dz = Dropzone::new();
        dz.on_drop(vec![DroppedFile::new("p.pdf", Some("application/pdf"), b"%PDF".to_vec())]).unwrap();
        dz.begin_submit();
        dz.finish::<&str>(Err("boom"));
        let failed = templates.fragment(&dz.view()).unwrap();
        assert!(failed.contains(&format!(r#"role="alert">{SUBMISSION_FAILED_MESSAGE}</div>"#)));
        assert!(failed.contains("Select p.pdf again to resubmit."));
        assert!(!failed.contains("File selected"));
    }
}

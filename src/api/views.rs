//! Server-rendered HTML pages.
//!
//! The pages are deliberately plain: a shell with a shared header, small
//! forms, and tables. Client-side behavior (form posts, autocomplete
//! debouncing, delete buttons) lives in the inline scripts; the server
//! only renders state it already has.

use crate::config;
use crate::models::{PatientOption, PatientRecord};

/// Escape text for embedding into HTML body or attribute positions.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} — {app}</title>\n\
         </head>\n\
         <body>\n\
         <header>\n\
         <h1>{app}</h1>\n\
         <nav>\n\
         <a href=\"/\">Dashboard</a>\n\
         <a href=\"/add_patient\">Add Patient</a>\n\
         <a href=\"/prescription\">Prescription</a>\n\
         <a href=\"/patient_records\">Patient Records</a>\n\
         <a href=\"/diagnosis\">Diagnosis</a>\n\
         </nav>\n\
         </header>\n\
         <main>\n{body}</main>\n\
         </body>\n\
         </html>\n",
        app = config::APP_NAME,
    )
}

pub fn dashboard() -> String {
    let body = format!(
        "<h2>Dashboard</h2>\n\
         <p>{} v{} — clinic record keeper.</p>\n\
         <ul>\n\
         <li><a href=\"/add_patient\">Register a patient</a></li>\n\
         <li><a href=\"/prescription\">Record a prescription</a></li>\n\
         <li><a href=\"/patient_records\">Browse patient records</a></li>\n\
         <li><a href=\"/diagnosis\">Diagnosis overview</a></li>\n\
         </ul>\n",
        config::APP_NAME,
        config::APP_VERSION,
    );
    page("Dashboard", &body)
}

/// Registration form. `next_id` is advisory only: the store assigns the
/// real id on insert, and this preview can be stale under concurrent
/// registrations.
pub fn add_patient_form(next_id: i64) -> String {
    let body = format!(
        "<h2>Register Patient</h2>\n\
         <p>Next patient id (advisory): <strong>{next_id}</strong></p>\n\
         <form method=\"post\" action=\"/add_patient\">\n\
         <label>Name <input name=\"name\" required></label><br>\n\
         <label>Age <input name=\"age\" required></label><br>\n\
         <label>Gender <input name=\"gender\" required></label><br>\n\
         <label>Address <input name=\"address\" required></label><br>\n\
         <label>Contact <input name=\"contact\" required></label><br>\n\
         <label>Admission date <input name=\"admission_date\" required></label><br>\n\
         <label>Room <input name=\"room\" required></label><br>\n\
         <button type=\"submit\">Register</button>\n\
         </form>\n",
    );
    page("Register Patient", &body)
}

/// Prescription entry page: patient selector plus the disease
/// autocomplete wired to `/disease_suggestions`.
pub fn prescription_form(patients: &[PatientOption]) -> String {
    let mut options = String::new();
    for p in patients {
        options.push_str(&format!(
            "<option value=\"{}\">{} (#{})</option>\n",
            p.id,
            escape(&p.name),
            p.id
        ));
    }

    let body = format!(
        "<h2>Record Prescription</h2>\n\
         <form id=\"prescription-form\">\n\
         <label>Patient <select id=\"patient\" name=\"patientId\">\n{options}</select></label><br>\n\
         <label>Disease <input id=\"disease\" name=\"disease\" autocomplete=\"off\"></label>\n\
         <ul id=\"suggestions\"></ul>\n\
         <label>NAMASTE code <input id=\"namaste\" name=\"namaste\"></label><br>\n\
         <label>ICD-11 code <input id=\"icd11\" name=\"icd11\"></label><br>\n\
         <label>Biomedicine <input id=\"biomedicine\" name=\"biomedicine\"></label><br>\n\
         <label>Description <textarea id=\"description\" name=\"description\"></textarea></label><br>\n\
         <label>Medication <textarea id=\"medication\" name=\"medication\"></textarea></label><br>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <script>\n\
         const form = document.getElementById('prescription-form');\n\
         const disease = document.getElementById('disease');\n\
         const list = document.getElementById('suggestions');\n\
         let timer = null;\n\
         disease.addEventListener('input', () => {{\n\
           clearTimeout(timer);\n\
           timer = setTimeout(async () => {{\n\
             const q = disease.value.trim();\n\
             list.innerHTML = '';\n\
             if (!q) return;\n\
             const entries = await (await fetch('/disease_suggestions?q=' + encodeURIComponent(q))).json();\n\
             for (const e of entries) {{\n\
               const li = document.createElement('li');\n\
               li.textContent = e.display;\n\
               li.onclick = () => {{\n\
                 disease.value = e.english_name;\n\
                 document.getElementById('namaste').value = e.namaste;\n\
                 document.getElementById('icd11').value = e.icd11;\n\
                 document.getElementById('biomedicine').value = e.biomedicine;\n\
                 list.innerHTML = '';\n\
               }};\n\
               list.appendChild(li);\n\
             }}\n\
           }}, 200);\n\
         }});\n\
         form.addEventListener('submit', async (ev) => {{\n\
           ev.preventDefault();\n\
           const payload = {{\n\
             patientId: Number(document.getElementById('patient').value),\n\
             disease: disease.value,\n\
             namaste: document.getElementById('namaste').value,\n\
             icd11: document.getElementById('icd11').value,\n\
             biomedicine: document.getElementById('biomedicine').value,\n\
             description: document.getElementById('description').value,\n\
             medication: document.getElementById('medication').value,\n\
           }};\n\
           const res = await (await fetch('/save_prescription', {{\n\
             method: 'POST',\n\
             headers: {{'Content-Type': 'application/json'}},\n\
             body: JSON.stringify(payload),\n\
           }})).json();\n\
           alert(res.status === 'success' ? 'Saved' : res.message);\n\
         }});\n\
         </script>\n",
    );
    page("Record Prescription", &body)
}

pub fn patient_records(records: &[PatientRecord]) -> String {
    let mut rows = String::new();
    for r in records {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><button onclick=\"removePatient({})\">Delete</button></td></tr>\n",
            r.id,
            escape(&r.name),
            escape(&r.age.to_string()),
            escape(&r.contact),
            escape(&r.disease),
            r.id,
        ));
    }

    let body = format!(
        "<h2>Patient Records</h2>\n\
         <table border=\"1\">\n\
         <tr><th>Id</th><th>Name</th><th>Age</th><th>Contact</th><th>Disease</th><th></th></tr>\n\
         {rows}</table>\n\
         <script>\n\
         async function removePatient(id) {{\n\
           const res = await (await fetch('/delete_patient/' + id, {{method: 'DELETE'}})).json();\n\
           if (res.status === 'success') location.reload(); else alert(res.message);\n\
         }}\n\
         </script>\n",
    );
    page("Patient Records", &body)
}

/// Diagnosis page shell; rows are fetched from `/get_diagnosis` by the
/// inline script.
pub fn diagnosis_page() -> String {
    let body = "<h2>Diagnosis</h2>\n\
         <table border=\"1\" id=\"diagnosis-table\">\n\
         <tr><th>Id</th><th>Name</th><th>Age</th><th>Gender</th>\
         <th>Contact</th><th>Address</th><th>Disease</th></tr>\n\
         </table>\n\
         <script>\n\
         (async () => {\n\
           const rows = await (await fetch('/get_diagnosis')).json();\n\
           const table = document.getElementById('diagnosis-table');\n\
           for (const r of rows) {\n\
             const tr = document.createElement('tr');\n\
             for (const key of ['id', 'name', 'age', 'gender', 'contact', 'address', 'disease']) {\n\
               const td = document.createElement('td');\n\
               td.textContent = r[key];\n\
               tr.appendChild(td);\n\
             }\n\
             table.appendChild(tr);\n\
           }\n\
         })();\n\
         </script>\n"
        .to_string();
    page("Diagnosis", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgeValue;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape("<script>\"x\" & 'y'</script>"),
            "&lt;script&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn dashboard_links_all_sections() {
        let html = dashboard();
        for href in ["/add_patient", "/prescription", "/patient_records", "/diagnosis"] {
            assert!(html.contains(href), "missing link to {href}");
        }
    }

    #[test]
    fn add_patient_form_shows_advisory_id_and_all_fields() {
        let html = add_patient_form(7);
        assert!(html.contains("<strong>7</strong>"));
        for field in ["name", "age", "gender", "address", "contact", "admission_date", "room"] {
            assert!(html.contains(&format!("name=\"{field}\"")), "missing field {field}");
        }
    }

    #[test]
    fn prescription_form_escapes_patient_names() {
        let patients = vec![PatientOption {
            id: 1,
            name: "<b>Asha</b>".into(),
        }];
        let html = prescription_form(&patients);
        assert!(html.contains("&lt;b&gt;Asha&lt;/b&gt;"));
        assert!(!html.contains("<b>Asha</b>"));
    }

    #[test]
    fn records_table_renders_rows() {
        let records = vec![PatientRecord {
            id: 3,
            name: "Ravi".into(),
            age: AgeValue::Number(51),
            contact: "98x".into(),
            disease: "Jwara".into(),
        }];
        let html = patient_records(&records);
        assert!(html.contains("Ravi"));
        assert!(html.contains("Jwara"));
        assert!(html.contains("removePatient(3)"));
    }

    #[test]
    fn records_table_renders_text_age_verbatim() {
        let records = vec![PatientRecord {
            id: 1,
            name: "Asha".into(),
            age: AgeValue::Text("forty".into()),
            contact: "98x".into(),
            disease: String::new(),
        }];
        let html = patient_records(&records);
        assert!(html.contains("<td>forty</td>"));
    }
}

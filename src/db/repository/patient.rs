use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::{DiagnosisRecord, NewPatient, PatientOption, PatientRecord};

/// Insert a patient row and return the store-assigned id.
pub fn insert_patient(conn: &Connection, patient: &NewPatient) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO patients (name, age, gender, address, contact, admission_date, room)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            patient.name,
            patient.age,
            patient.gender,
            patient.address,
            patient.contact,
            patient.admission_date,
            patient.room,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Advisory `max(id) + 1` preview shown on the registration form.
/// The authoritative id is assigned on insert; under concurrent
/// registrations this preview can be stale.
pub fn next_patient_id(conn: &Connection) -> Result<i64, DatabaseError> {
    let max_id: Option<i64> =
        conn.query_row("SELECT MAX(id) FROM patients", [], |row| row.get(0))?;
    Ok(max_id.unwrap_or(0) + 1)
}

/// id + name of every patient, for selection controls.
pub fn list_patient_options(conn: &Connection) -> Result<Vec<PatientOption>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, name FROM patients ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(PatientOption {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    Ok(rows.collect::<rusqlite::Result<_>>()?)
}

// The "current" disease is the prescription with the highest id for the
// patient; IFNULL keeps patients without prescriptions at '' rather than
// dropping or nulling them.
const CURRENT_DISEASE: &str = "IFNULL((SELECT disease FROM prescriptions pr \
     WHERE pr.patient_id = p.id ORDER BY pr.id DESC LIMIT 1), '')";

/// Records view rows: identity columns plus current disease.
pub fn list_patient_records(conn: &Connection) -> Result<Vec<PatientRecord>, DatabaseError> {
    let sql = format!(
        "SELECT p.id, p.name, p.age, p.contact, {CURRENT_DISEASE} AS disease
         FROM patients p ORDER BY p.id"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| {
        Ok(PatientRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            age: row.get(2)?,
            contact: row.get(3)?,
            disease: row.get(4)?,
        })
    })?;
    Ok(rows.collect::<rusqlite::Result<_>>()?)
}

/// Diagnosis listing rows: wider projection, same current-disease rule.
pub fn list_diagnosis_records(conn: &Connection) -> Result<Vec<DiagnosisRecord>, DatabaseError> {
    let sql = format!(
        "SELECT p.id, p.name, p.age, p.gender, p.contact, p.address,
                {CURRENT_DISEASE} AS disease
         FROM patients p ORDER BY p.id"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| {
        Ok(DiagnosisRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            age: row.get(2)?,
            gender: row.get(3)?,
            contact: row.get(4)?,
            address: row.get(5)?,
            disease: row.get(6)?,
        })
    })?;
    Ok(rows.collect::<rusqlite::Result<_>>()?)
}

/// Delete a patient and all of its prescriptions as one unit.
/// Both deletes run in a single transaction; a failure in either rolls
/// back, so prescriptions are never orphaned.
pub fn delete_patient(conn: &mut Connection, patient_id: i64) -> Result<(), DatabaseError> {
    let tx = conn.transaction()?;
    tx.execute(
        "DELETE FROM prescriptions WHERE patient_id = ?1",
        [patient_id],
    )?;
    tx.execute("DELETE FROM patients WHERE id = ?1", [patient_id])?;
    tx.commit()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::prescription::{insert_prescription, prescriptions_for_patient};
    use crate::db::sqlite::open_memory_database;
    use crate::models::NewPrescription;

    fn sample_patient(name: &str) -> NewPatient {
        NewPatient {
            name: name.to_string(),
            age: "42".to_string(),
            gender: "F".to_string(),
            address: "Pune".to_string(),
            contact: "9812345678".to_string(),
            admission_date: "2024-03-01".to_string(),
            room: "7".to_string(),
        }
    }

    fn sample_prescription(patient_id: i64, disease: &str) -> NewPrescription {
        NewPrescription {
            patient_id,
            disease: disease.to_string(),
            namaste_code: "N01".to_string(),
            icd_code: "I01".to_string(),
            description: String::new(),
            medication: String::new(),
            biomedicine: "Common Cold".to_string(),
        }
    }

    #[test]
    fn insert_returns_increasing_ids() {
        let conn = open_memory_database().unwrap();
        let first = insert_patient(&conn, &sample_patient("Asha")).unwrap();
        let second = insert_patient(&conn, &sample_patient("Ravi")).unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn next_id_is_one_on_empty_store() {
        let conn = open_memory_database().unwrap();
        assert_eq!(next_patient_id(&conn).unwrap(), 1);
    }

    #[test]
    fn next_id_is_max_plus_one() {
        let conn = open_memory_database().unwrap();
        insert_patient(&conn, &sample_patient("Asha")).unwrap();
        insert_patient(&conn, &sample_patient("Ravi")).unwrap();
        assert_eq!(next_patient_id(&conn).unwrap(), 3);
    }

    #[test]
    fn options_list_id_and_name() {
        let conn = open_memory_database().unwrap();
        insert_patient(&conn, &sample_patient("Asha")).unwrap();
        let options = list_patient_options(&conn).unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].name, "Asha");
    }

    #[test]
    fn records_show_empty_disease_without_prescriptions() {
        let conn = open_memory_database().unwrap();
        insert_patient(&conn, &sample_patient("Asha")).unwrap();
        let records = list_patient_records(&conn).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].disease, "");
    }

    #[test]
    fn current_disease_is_highest_prescription_id() {
        let conn = open_memory_database().unwrap();
        let id = insert_patient(&conn, &sample_patient("Asha")).unwrap();
        insert_prescription(&conn, &sample_prescription(id, "Cold")).unwrap();
        insert_prescription(&conn, &sample_prescription(id, "Fever")).unwrap();

        let records = list_patient_records(&conn).unwrap();
        assert_eq!(records[0].disease, "Fever");

        let diagnoses = list_diagnosis_records(&conn).unwrap();
        assert_eq!(diagnoses[0].disease, "Fever");
        assert_eq!(diagnoses[0].address, "Pune");
    }

    #[test]
    fn delete_removes_patient_and_prescriptions() {
        let mut conn = open_memory_database().unwrap();
        let id = insert_patient(&conn, &sample_patient("Asha")).unwrap();
        insert_prescription(&conn, &sample_prescription(id, "Cold")).unwrap();
        insert_prescription(&conn, &sample_prescription(id, "Fever")).unwrap();

        delete_patient(&mut conn, id).unwrap();

        assert!(list_patient_records(&conn).unwrap().is_empty());
        assert!(prescriptions_for_patient(&conn, id).unwrap().is_empty());
    }

    #[test]
    fn delete_leaves_other_patients_untouched() {
        let mut conn = open_memory_database().unwrap();
        let first = insert_patient(&conn, &sample_patient("Asha")).unwrap();
        let second = insert_patient(&conn, &sample_patient("Ravi")).unwrap();
        insert_prescription(&conn, &sample_prescription(second, "Cold")).unwrap();

        delete_patient(&mut conn, first).unwrap();

        let records = list_patient_records(&conn).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, second);
        assert_eq!(prescriptions_for_patient(&conn, second).unwrap().len(), 1);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut conn = open_memory_database().unwrap();
        let first = insert_patient(&conn, &sample_patient("Asha")).unwrap();
        delete_patient(&mut conn, first).unwrap();
        let second = insert_patient(&conn, &sample_patient("Ravi")).unwrap();
        assert!(second > first);
    }

    #[test]
    fn non_numeric_age_lists_verbatim() {
        use crate::models::AgeValue;

        let conn = open_memory_database().unwrap();
        let mut patient = sample_patient("Asha");
        patient.age = "forty".to_string();
        insert_patient(&conn, &patient).unwrap();
        insert_patient(&conn, &sample_patient("Ravi")).unwrap();

        let records = list_patient_records(&conn).unwrap();
        assert_eq!(records[0].age, AgeValue::Text("forty".into()));
        assert_eq!(records[1].age, AgeValue::Number(42));

        let diagnoses = list_diagnosis_records(&conn).unwrap();
        assert_eq!(diagnoses[0].age, AgeValue::Text("forty".into()));
    }

    #[test]
    fn age_text_coerces_to_integer_column() {
        let conn = open_memory_database().unwrap();
        insert_patient(&conn, &sample_patient("Asha")).unwrap();
        let age: i64 = conn
            .query_row("SELECT age FROM patients WHERE id = 1", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(age, 42);
    }
}

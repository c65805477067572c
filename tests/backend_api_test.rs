//! BackendService endpoint routing and payload contracts.

use chrono::{DateTime, Utc};
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dentalvision::backend::{
    BackendService, ImageAnalysisRequest, NewAppointment, NewPatient, NewReport,
};
use dentalvision::ApiClient;

fn patient_id() -> Uuid {
    Uuid::parse_str("7f9f4d04-6a2b-4c6e-9a3f-0d9f0e1c5b21").unwrap()
}

fn report_id() -> Uuid {
    Uuid::parse_str("3f2e1d0c-9b8a-4765-8432-1f0e9d8c7b6a").unwrap()
}

fn timestamp() -> DateTime<Utc> {
    "2024-05-01T10:30:00Z".parse().unwrap()
}

#[tokio::test]
async fn test_list_and_create_patients() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": patient_id(),
            "fullName": "Sam Rivera",
            "email": "sam@example.com",
            "createdAt": "2024-05-01T10:30:00Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/patients"))
        .and(body_json(serde_json::json!({
            "fullName": "Noor Haddad",
            "email": "noor@example.com",
            "phone": "+31-20-5551234"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": patient_id(),
            "fullName": "Noor Haddad",
            "email": "noor@example.com",
            "phone": "+31-20-5551234",
            "createdAt": "2024-05-01T10:30:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let backend = BackendService::new(&client);

    let patients = backend.list_patients().await.unwrap();
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0].full_name, "Sam Rivera");
    assert_eq!(patients[0].phone, None);

    let created = backend
        .create_patient(&NewPatient {
            full_name: "Noor Haddad".into(),
            email: "noor@example.com".into(),
            phone: Some("+31-20-5551234".into()),
        })
        .await
        .unwrap();
    assert_eq!(created.full_name, "Noor Haddad");
    assert_eq!(created.created_at, timestamp());
}

#[tokio::test]
async fn test_appointments_use_the_patient_scoped_path() {
    let server = MockServer::start().await;
    let appointments_path = format!("/api/v1/patients/{}/appointments", patient_id());
    Mock::given(method("GET"))
        .and(path(appointments_path.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": report_id(),
            "patientId": patient_id(),
            "scheduledAt": "2024-05-08T09:00:00Z",
            "reason": "Filling",
            "status": "confirmed"
        }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(appointments_path))
        .and(body_json(serde_json::json!({
            "scheduledAt": "2024-05-08T09:00:00Z",
            "reason": "Filling"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": report_id(),
            "patientId": patient_id(),
            "scheduledAt": "2024-05-08T09:00:00Z",
            "reason": "Filling",
            "status": "pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let backend = BackendService::new(&client);

    let appointments = backend.patient_appointments(patient_id()).await.unwrap();
    assert_eq!(appointments[0].reason, "Filling");
    assert_eq!(appointments[0].patient_id, patient_id());

    let booked = backend
        .schedule_appointment(
            patient_id(),
            &NewAppointment {
                scheduled_at: "2024-05-08T09:00:00Z".parse().unwrap(),
                reason: "Filling".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(booked.status, "pending");
}

#[tokio::test]
async fn test_report_lifecycle() {
    let server = MockServer::start().await;
    let report_json = serde_json::json!({
        "id": report_id(),
        "patientId": patient_id(),
        "title": "Spring checkup",
        "summary": "Two cavities found",
        "createdAt": "2024-05-01T10:30:00Z"
    });
    Mock::given(method("GET"))
        .and(path("/api/v1/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([report_json.clone()])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/reports"))
        .respond_with(ResponseTemplate::new(201).set_body_json(report_json.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/reports/{}", report_id())))
        .respond_with(ResponseTemplate::new(200).set_body_json(report_json))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/v1/reports/{}", report_id())))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"deleted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let backend = BackendService::new(&client);
    let draft = NewReport {
        patient_id: patient_id(),
        title: "Spring checkup".into(),
        summary: "Two cavities found".into(),
    };

    assert_eq!(backend.list_reports().await.unwrap().len(), 1);
    assert_eq!(
        backend.submit_report(&draft).await.unwrap().title,
        "Spring checkup"
    );
    assert_eq!(
        backend.update_report(report_id(), &draft).await.unwrap().id,
        report_id()
    );
    assert!(backend.delete_report(report_id()).await.unwrap().deleted);
}

#[tokio::test]
async fn test_system_statistics() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/system/statistics"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalPatients": 42,
            "totalReports": 110,
            "totalAnalyses": 200,
            "averageConfidence": 0.91
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let stats = BackendService::new(&client).system_statistics().await.unwrap();

    assert_eq!(stats.total_patients, 42);
    assert_eq!(stats.total_analyses, 200);
    assert_eq!(stats.average_confidence, 0.91);
}

#[tokio::test]
async fn test_analyze_image_sends_base64_payload() {
    let server = MockServer::start().await;
    let request = ImageAnalysisRequest::from_picked(&[0x89, 0x50, 0x4e, 0x47], "scan.png", "image/png");
    Mock::given(method("POST"))
        .and(path("/api/v1/analysis"))
        .and(body_json(serde_json::json!({
            "image": "iVBORw==",
            "fileName": "scan.png",
            "mimeType": "image/png"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": report_id(),
            "cavityCount": 2,
            "healthyCount": 28,
            "confidence": 0.91,
            "createdAt": "2024-05-01T10:30:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let analysis = BackendService::new(&client).analyze_image(&request).await.unwrap();

    assert_eq!(analysis.cavity_count, 2);
    assert_eq!(analysis.healthy_count, 28);
    assert_eq!(analysis.created_at, timestamp());
}

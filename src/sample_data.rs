pub const JAVA_LOG: &str = r#"2024-01-15 10:00:00 INFO  Starting UserService
2024-01-15 10:00:01 ERROR Exception in user registration
java.lang.RuntimeException: Database connection failed
    at com.example.UserService.registerUser(UserService.java:42)
    at com.example.UserController.signup(UserController.java:23)
    at java.base/java.lang.Thread.run(Thread.java:829)
Caused by: java.sql.SQLException: Connection timeout
    at com.mysql.jdbc.Driver.connect(Driver.java:115)
    ... 3 more
2024-01-15 10:00:02 INFO  Retrying user registration
2024-01-15 10:00:03 INFO  User registration successful"#;

pub const PYTHON_LOG: &str = r#"[2024-01-15 10:05:00] INFO: Processing user data
[2024-01-15 10:05:01] ERROR: Failed to process user data
Traceback (most recent call last):
  File "/app/user_processor.py", line 25, in process_user
    result = validate_email(user.email)
  File "/app/validators.py", line 15, in validate_email
    return regex.match(pattern, email)
AttributeError: 'NoneType' object has no attribute 'match'
[2024-01-15 10:05:02] INFO: Skipping invalid user record
[2024-01-15 10:05:03] INFO: Processing complete"#;

pub const CONFIG_LOG: &str = r#"=== DATABASE CONFIG ===
host: localhost
port: 5432
database: myapp
username: app_user
connection_pool: 10
---
=== REDIS CONFIG ===
host: redis.internal
port: 6379
database: 0
password: secret123
---
=== API CONFIG ===
base_url: https://api.example.com
timeout: 30
retries: 3"#;

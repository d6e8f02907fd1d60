// src/utils/email.rs

use crate::domain::contact_message_model;
use crate::utils::validation::is_valid_email;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::env;
use thiserror::Error;
use tracing::{info, warn};

/// メール送信エラー
#[derive(Error, Debug)]
pub enum EmailError {
    #[error("SMTP configuration error: {0}")]
    ConfigurationError(String),

    #[error("Failed to send email: {0}")]
    SendError(String),

    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Missing email configuration")]
    MissingConfiguration,
}

/// メール設定
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP サーバーホスト
    pub smtp_host: String,
    /// SMTP サーバーポート
    pub smtp_port: u16,
    /// SMTP ユーザー名
    pub smtp_username: String,
    /// SMTP パスワード
    pub smtp_password: String,
    /// 送信者メールアドレス
    pub from_email: String,
    /// 送信者名
    pub from_name: String,
    /// 問い合わせ通知の宛先
    pub contact_email: String,
    /// 開発モードかどうか（ログ出力のみ）
    pub development_mode: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "localhost".to_string(),
            smtp_port: 587,
            smtp_username: "user".to_string(),
            smtp_password: "password".to_string(),
            from_email: "noreply@example.com".to_string(),
            from_name: "Site Backend".to_string(),
            contact_email: "info@example.com".to_string(),
            development_mode: true, // 開発環境ではデフォルトで true
        }
    }
}

impl EmailConfig {
    /// 環境変数から設定を読み込み
    pub fn from_env() -> Result<Self, EmailError> {
        let development_mode = env::var("EMAIL_DEVELOPMENT_MODE")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        let contact_email =
            env::var("CONTACT_EMAIL").unwrap_or_else(|_| "info@example.com".to_string());

        // 開発モードの場合はデフォルト設定を返す
        if development_mode {
            return Ok(Self {
                development_mode: true,
                contact_email,
                ..Default::default()
            });
        }

        // 本番環境の設定
        let smtp_host = env::var("SMTP_HOST").map_err(|_| EmailError::MissingConfiguration)?;

        let smtp_port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .map_err(|_| EmailError::ConfigurationError("Invalid SMTP port".to_string()))?;

        let smtp_username =
            env::var("SMTP_USERNAME").map_err(|_| EmailError::MissingConfiguration)?;

        let smtp_password =
            env::var("SMTP_PASSWORD").map_err(|_| EmailError::MissingConfiguration)?;

        let from_email = env::var("FROM_EMAIL").map_err(|_| EmailError::MissingConfiguration)?;

        let from_name = env::var("FROM_NAME").unwrap_or_else(|_| "Site Backend".to_string());

        Ok(Self {
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            from_email,
            from_name,
            contact_email,
            development_mode: false,
        })
    }

    /// 設定の検証
    pub fn validate(&self) -> Result<(), EmailError> {
        if self.development_mode {
            return Ok(()); // 開発モードでは検証をスキップ
        }

        if self.smtp_host.is_empty() {
            return Err(EmailError::ConfigurationError(
                "SMTP host is required".to_string(),
            ));
        }

        if !is_valid_email(&self.from_email) {
            return Err(EmailError::InvalidAddress(self.from_email.clone()));
        }

        if !is_valid_email(&self.contact_email) {
            return Err(EmailError::InvalidAddress(self.contact_email.clone()));
        }

        Ok(())
    }
}

/// メール送信サービス
///
/// 問い合わせフォームの通知メール送信のみを担う。開発モードでは
/// 実送信せずログに出す。
pub struct EmailService {
    config: EmailConfig,
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl EmailService {
    /// 新しいEmailServiceを作成
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        config.validate()?;

        let transport = if config.development_mode {
            None
        } else {
            let credentials = Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            );
            let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
                .map_err(|e| EmailError::ConfigurationError(e.to_string()))?
                .port(config.smtp_port)
                .credentials(credentials)
                .build();
            Some(transport)
        };

        Ok(Self { config, transport })
    }

    /// 問い合わせ内容の通知メールを送信
    ///
    /// 送信失敗は呼び出し側でログに落とすだけで、問い合わせ自体の成否には
    /// 影響させない（fire-and-forget）。
    pub async fn send_contact_notification(
        &self,
        contact: &contact_message_model::Model,
    ) -> Result<(), EmailError> {
        let subject = format!("Nouveau contact - {}", contact.subject);
        let body = format!(
            "Nouveau message de contact\n\n\
             Nom: {}\n\
             Email: {}\n\
             Téléphone: {}\n\
             Code postal: {}\n\
             Sujet: {}\n\n\
             Message:\n{}\n",
            contact.name,
            contact.email,
            contact.phone.as_deref().unwrap_or("Non fourni"),
            contact.postal_code.as_deref().unwrap_or("Non fourni"),
            contact.subject,
            contact.message,
        );

        if self.config.development_mode {
            // 開発モードではログ出力のみ
            info!(
                to = %self.config.contact_email,
                subject = %subject,
                from = %contact.email,
                "development mode: contact notification logged instead of sent"
            );
            return Ok(());
        }

        let transport = self
            .transport
            .as_ref()
            .ok_or(EmailError::MissingConfiguration)?;

        let from: Mailbox = format!("{} <{}>", self.config.from_name, self.config.from_email)
            .parse()
            .map_err(|_| EmailError::InvalidAddress(self.config.from_email.clone()))?;
        let to: Mailbox = self
            .config
            .contact_email
            .parse()
            .map_err(|_| EmailError::InvalidAddress(self.config.contact_email.clone()))?;

        let mut builder = Message::builder().from(from).to(to).subject(subject);

        // 返信先は問い合わせ元のアドレス
        if is_valid_email(&contact.email) {
            if let Ok(reply_to) = contact.email.parse::<Mailbox>() {
                builder = builder.reply_to(reply_to);
            }
        }

        let message = builder
            .body(body)
            .map_err(|e| EmailError::SendError(e.to_string()))?;

        match transport.send(message).await {
            Ok(_) => {
                info!(to = %self.config.contact_email, "contact notification sent");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "failed to send contact notification");
                Err(EmailError::SendError(e.to_string()))
            }
        }
    }
}
